#![allow(clippy::module_inception)]

use crate::{
    ast::statements::Program,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::{environment::Environment, type_checker::type_check},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Parses a token sequence as a program and type checks it.
///
/// # Returns
///
/// The parsed program together with its final top-level environment.
pub fn check_program(tokens: Vec<Token>) -> Result<(Program, Environment), Error> {
    let program = parse(tokens)?;
    let environment = type_check(&program)?;

    Ok((program, environment))
}

/// Scans, parses and type checks source text.
pub fn check_source(source: &str) -> Result<(Program, Environment), Error> {
    check_program(tokenize(source)?)
}
