//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the three entry points.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers
//!
//! Every entry point consumes the whole token sequence or fails.

use std::collections::HashMap;

use crate::{
    ast::{expressions::Exp, statements::{Program, Stmt}},
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Symbol, Token, TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_stmt, parse_stmt_sequence},
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing statements, expressions, and types. It tracks the current
/// position in the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Creates a new Parser instance with all lookup tables registered.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(Token::kind)
    }

    /// Returns the kind of the token `offset` places ahead of the cursor.
    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(Token::kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            None => Err(ParseError::new(
                ParseErrorImpl::UnexpectedEnd {
                    expected: String::from("another token"),
                },
                self.pos,
            )),
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<ParseError>,
    ) -> Result<Token, ParseError> {
        if self.at(expected_kind) {
            return self.advance();
        }

        match error {
            Some(error) => Err(error),
            None => Err(self.unexpected(&format!("expected {:?}", expected_kind))),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        self.expect_error(expected_kind, None)
    }

    /// Expects an identifier and returns its name.
    pub fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.current_token() {
            Some(Token::Variable(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.unexpected("expected an identifier")),
        }
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn skip_line_breaks(&mut self) {
        while self.at(TokenKind::Symbol(Symbol::LineBreak)) {
            self.pos += 1;
        }
    }

    /// Skips line breaks and semicolons, reporting whether any were found.
    pub fn skip_separators(&mut self) -> bool {
        let start = self.pos;
        while self.current_token().is_some_and(Token::is_separator) {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Builds an error describing the current token, or the end of input.
    pub fn unexpected(&self, message: &str) -> ParseError {
        match self.current_token() {
            Some(token) => ParseError::new(
                ParseErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from(message),
                },
                self.pos,
            ),
            None => ParseError::new(
                ParseErrorImpl::UnexpectedEnd {
                    expected: String::from(message),
                },
                self.pos,
            ),
        }
    }

    /// Fails if any tokens remain.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        match self.current_token() {
            Some(token) => Err(ParseError::new(
                ParseErrorImpl::TrailingTokens {
                    token: token.to_string(),
                },
                self.pos,
            )),
            None => Ok(()),
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix or postfix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Leaves the binding power table alone, since a token such as `(` or
    /// `++` can start an expression and continue one.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> usize {
        self.pos
    }

    /// Rewinds or fast-forwards the cursor, used when a speculative parse fails.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }
}

fn empty_input() -> ParseError {
    ParseError::new(ParseErrorImpl::EmptyInput, 0)
}

/// Parses the whole token sequence as a single expression.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Exp, ParseError> {
    let mut parser = Parser::new(tokens);
    if !parser.has_tokens() {
        return Err(empty_input());
    }

    let expression = parse_expr(&mut parser, BindingPower::Default)?;
    parser.expect_end()?;

    Ok(expression)
}

/// Parses the whole token sequence as a single statement.
///
/// Separators before and after the statement are ignored.
pub fn parse_statement(tokens: Vec<Token>) -> Result<Stmt, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.skip_separators();
    if !parser.has_tokens() {
        return Err(empty_input());
    }

    let statement = parse_stmt(&mut parser)?;
    parser.skip_separators();
    parser.expect_end()?;

    Ok(statement)
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing whole source files. Statements
/// must be separated by line breaks or semicolons.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);

    let statements = parse_stmt_sequence(&mut parser, None)?;
    if statements.is_empty() {
        return Err(empty_input());
    }
    parser.expect_end()?;

    Ok(Program { statements })
}
