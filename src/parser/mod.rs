//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (declarations, assignments, functions, control flow)
//! - Expression parsing (binary ops, prefix/postfix ops, lambdas, calls)
//! - Type parsing for type annotations
//! - String template splicing
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod interpolation;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
