//! String template splicing.
//!
//! A string literal may embed `${expression}` or `$identifier`. Each
//! embedded piece is cut out of the literal, parsed on its own, and stored
//! against the offset in the remaining text where it was removed.

use crate::{
    ast::expressions::{Exp, StringExp},
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::lexer::tokenize,
};

use super::parser::parse_expression;

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Tokenizes and parses the text between `${` and `}`.
fn parse_embedded(template: &str, position: usize) -> Result<Exp, ParseError> {
    let invalid = |error: ParseError| {
        ParseError::new(
            ParseErrorImpl::InvalidTemplate {
                template: template.to_string(),
                message: error.to_string(),
            },
            position,
        )
    };

    let tokens = tokenize(template).map_err(invalid)?;
    parse_expression(tokens).map_err(invalid)
}

/// Splits `literal` into its remainder text and interpolations.
///
/// Offsets count characters of the remainder, except that a `$` kept as
/// plain text advances the offset by two.
///
/// # Arguments
///
/// * `literal` - The unescaped contents of a string token
/// * `position` - Token index of the literal, used for errors
pub fn parse_string_template(literal: &str, position: usize) -> Result<StringExp, ParseError> {
    let chars: Vec<char> = literal.chars().collect();
    let mut remainder = String::new();
    let mut interpolations = vec![];
    let mut offset = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '$' {
            remainder.push(chars[i]);
            offset += 1;
            i += 1;
            continue;
        }

        match chars.get(i + 1) {
            Some('{') => {
                let start = i + 2;
                let mut end = start;
                let mut depth = 1;

                while end < chars.len() {
                    match chars[end] {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    if depth == 0 {
                        break;
                    }
                    end += 1;
                }

                if depth != 0 {
                    return Err(ParseError::new(
                        ParseErrorImpl::UnterminatedTemplate {
                            literal: literal.to_string(),
                        },
                        position,
                    ));
                }

                let template: String = chars[start..end].iter().collect();
                interpolations.push((offset, parse_embedded(&template, position)?));
                i = end + 1;
            }
            Some(&ch) if is_identifier_start(ch) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_identifier_char(chars[end]) {
                    end += 1;
                }

                let name: String = chars[start..end].iter().collect();
                interpolations.push((offset, Exp::Variable(name)));
                i = end;
            }
            _ => {
                remainder.push('$');
                offset += 2;
                i += 1;
            }
        }
    }

    Ok(StringExp {
        remainder,
        interpolations,
    })
}
