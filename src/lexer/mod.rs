//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into the
//! token sequence the parser consumes. It handles:
//!
//! - Tokenization of source code using ordered regex patterns
//! - Recognition of keywords, type names, identifiers, literals and operators
//! - Telling `<`/`>` type-argument brackets apart from comparisons
//! - Comments and whitespace, keeping line breaks as separators
//!
//! The parser also uses it to scan the bodies of `${...}` string templates.

pub mod lexer;
pub mod tokens;
