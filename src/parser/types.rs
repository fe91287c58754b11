//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Basic types (`Int`, `Boolean`, `String`, `Any`)
//! - Collection types (`Array<T>`, `MutableList<T>`) over a basic element
//! - Function types (`(T1, T2) -> R`)
//!
//! Like expression parsing, each form is dispatched through a NUD table
//! keyed on the first token.

use std::collections::HashMap;

use crate::{
    ast::types::{BasicType, Type},
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Bracket, Symbol, Token, TokenKind, TypeName},
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, ParseError>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Type(TypeName::Int), parse_basic_type);
    parser.type_nud(TokenKind::Type(TypeName::Boolean), parse_basic_type);
    parser.type_nud(TokenKind::Type(TypeName::String), parse_basic_type);
    parser.type_nud(TokenKind::Type(TypeName::Any), parse_basic_type);
    parser.type_nud(TokenKind::Type(TypeName::Array), parse_collection_type);
    parser.type_nud(TokenKind::Type(TypeName::MutableList), parse_collection_type);
    parser.type_nud(TokenKind::Bracket(Bracket::LParen), parse_function_type);
}

pub fn parse_basic_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let position = parser.get_position();

    match parser.advance()? {
        Token::Type(TypeName::Int) => Ok(Type::Basic(BasicType::Int)),
        Token::Type(TypeName::Boolean) => Ok(Type::Basic(BasicType::Boolean)),
        Token::Type(TypeName::String) => Ok(Type::Basic(BasicType::String)),
        Token::Type(TypeName::Any) => Ok(Type::Basic(BasicType::Any)),
        token => Err(ParseError::new(
            ParseErrorImpl::UnexpectedTokenDetailed {
                token: token.to_string(),
                message: String::from("expected a basic type"),
            },
            position,
        )),
    }
}

/// `Array<T>` / `MutableList<T>`; `T` must be a basic type.
pub fn parse_collection_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let collection = parser.advance()?;
    parser.expect(TokenKind::Bracket(Bracket::LAngle))?;

    let element_position = parser.get_position();
    let element = match parse_type(parser)? {
        Type::Basic(element) => element,
        other => {
            return Err(ParseError::new(
                ParseErrorImpl::UnexpectedTokenDetailed {
                    token: other.to_string(),
                    message: String::from("collection elements must be a basic type"),
                },
                element_position,
            ))
        }
    };

    parser.expect(TokenKind::Bracket(Bracket::RAngle))?;

    match collection {
        Token::Type(TypeName::MutableList) => Ok(Type::MutableList(element)),
        _ => Ok(Type::Array(element)),
    }
}

/// `(T1, T2) -> R`
pub fn parse_function_type(parser: &mut Parser) -> Result<Type, ParseError> {
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;

    let mut parameters = vec![];
    while !parser.at(TokenKind::Bracket(Bracket::RParen)) {
        if !parameters.is_empty() {
            parser.expect(TokenKind::Symbol(Symbol::Comma))?;
        }
        parameters.push(parse_type(parser)?);
    }

    parser.expect(TokenKind::Bracket(Bracket::RParen))?;
    parser.expect(TokenKind::Symbol(Symbol::Arrow))?;
    let return_type = parse_type(parser)?;

    Ok(Type::function(parameters, return_type))
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let nud = parser
        .current_token_kind()
        .and_then(|kind| parser.get_type_nud_lookup().get(&kind).copied());

    match nud {
        Some(nud) => nud(parser),
        None => Err(parser.unexpected("expected a type")),
    }
}
