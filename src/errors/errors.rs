use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{
        ast::LoopControl,
        types::Type,
    },
    type_checker::signatures::Signature,
};

/// A failure raised while scanning or parsing.
///
/// `position` is a token index for parser errors and a byte offset
/// for scanner errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    internal_error: ParseErrorImpl,
    position: usize,
}

impl ParseError {
    pub fn new(error_impl: ParseErrorImpl, position: usize) -> Self {
        ParseError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_internal_error(&self) -> &ParseErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ParseErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ParseErrorImpl::NumberParseError { .. } => "NumberParseError",
            ParseErrorImpl::EmptyInput => "EmptyInput",
            ParseErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ParseErrorImpl::UnexpectedEnd { .. } => "UnexpectedEnd",
            ParseErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ParseErrorImpl::MissingSeparator { .. } => "MissingSeparator",
            ParseErrorImpl::UnterminatedTemplate { .. } => "UnterminatedTemplate",
            ParseErrorImpl::InvalidTemplate { .. } => "InvalidTemplate",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ParseErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ParseErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ParseErrorImpl::EmptyInput => ErrorTip::None,
            ParseErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ParseErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ParseErrorImpl::UnexpectedEnd { expected } => {
                ErrorTip::Suggestion(format!("Input ended while expecting {}", expected))
            }
            ParseErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after a complete parse, did you miss an operator?",
                token
            )),
            ParseErrorImpl::MissingSeparator { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a newline or semicolon?",
                token
            )),
            ParseErrorImpl::UnterminatedTemplate { .. } => {
                ErrorTip::Suggestion(String::from("Close the `${` interpolation with `}`"))
            }
            ParseErrorImpl::InvalidTemplate { template, message } => ErrorTip::Suggestion(
                format!("Interpolation `{}` is not an expression: {}", template, message),
            ),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for ParseError {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("empty input")]
    EmptyInput,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },
    #[error("unexpected trailing token: {token:?}")]
    TrailingTokens { token: String },
    #[error("missing separator before {token:?}")]
    MissingSeparator { token: String },
    #[error("unterminated string template: {literal:?}")]
    UnterminatedTemplate { literal: String },
    #[error("invalid string template {template:?}: {message}")]
    InvalidTemplate { template: String, message: String },
}

/// A failure raised while type checking a well-formed tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("operator {operator} cannot be applied to {left} and {right}")]
    BinaryOperatorMismatch {
        operator: String,
        left: Type,
        right: Type,
    },
    #[error("operator {operator} cannot be applied to {operand}")]
    UnaryOperatorMismatch { operator: String, operand: Type },
    #[error("variable {variable:?} not in scope")]
    NotInScope { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} needs an explicit type when declared without a value")]
    ExpectedExplicitType { variable: String },
    #[error("variable {variable:?} is read-only")]
    ReadOnlyVariable { variable: String },
    #[error("variable {variable:?} assigned before being declared")]
    UndefinedVariable { variable: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: Type, received: Type },
    #[error("cannot iterate over {received}")]
    NotACollection { received: Type },
    #[error("collections cannot hold {received}")]
    UnsupportedElementType { received: Type },
    #[error("{constructor} initializer takes exactly one parameter, received {received}")]
    InitializerArity { constructor: String, received: usize },
    #[error("{constructor} initializer parameter must be Int, received {received}")]
    InitializerParameterType { constructor: String, received: Type },
    #[error("{constructor} needs at least one element")]
    EmptyCollectionLiteral { constructor: String },
    #[error("cannot infer the type of lambda parameter {parameter:?}")]
    UnresolvedLambdaParameter { parameter: String },
    #[error("parameter {parameter:?} declared twice")]
    DuplicateParameter { parameter: String },
    #[error("if expression has no else branch")]
    MissingElseBranch,
    #[error("function {signature} undefined")]
    FunctionUndefined { signature: Signature },
    #[error("function {signature} already declared")]
    FunctionAlreadyDeclared { signature: Signature },
    #[error("function {name:?} declared inside a block")]
    NestedFunctionDeclaration { name: String },
    #[error("{control} outside of a loop")]
    LoopControlOutsideLoop { control: LoopControl },
    #[error("return outside of a function")]
    ReturnOutsideFunction,
    #[error("return types do not match: expected {expected}, received {received}")]
    ReturnTypeMismatch { expected: Type, received: Type },
    #[error("cannot print a value of type {received}")]
    NonBasicPrint { received: Type },
}

impl TypeError {
    pub fn get_error_name(&self) -> &str {
        match self {
            TypeError::BinaryOperatorMismatch { .. } => "BinaryOperatorMismatch",
            TypeError::UnaryOperatorMismatch { .. } => "UnaryOperatorMismatch",
            TypeError::NotInScope { .. } => "NotInScope",
            TypeError::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            TypeError::ExpectedExplicitType { .. } => "ExpectedExplicitType",
            TypeError::ReadOnlyVariable { .. } => "ReadOnlyVariable",
            TypeError::UndefinedVariable { .. } => "UndefinedVariable",
            TypeError::TypeMatchError { .. } => "TypeMatchError",
            TypeError::NotACollection { .. } => "NotACollection",
            TypeError::UnsupportedElementType { .. } => "UnsupportedElementType",
            TypeError::InitializerArity { .. } => "InitializerArity",
            TypeError::InitializerParameterType { .. } => "InitializerParameterType",
            TypeError::EmptyCollectionLiteral { .. } => "EmptyCollectionLiteral",
            TypeError::UnresolvedLambdaParameter { .. } => "UnresolvedLambdaParameter",
            TypeError::DuplicateParameter { .. } => "DuplicateParameter",
            TypeError::MissingElseBranch => "MissingElseBranch",
            TypeError::FunctionUndefined { .. } => "FunctionUndefined",
            TypeError::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            TypeError::NestedFunctionDeclaration { .. } => "NestedFunctionDeclaration",
            TypeError::LoopControlOutsideLoop { .. } => "LoopControlOutsideLoop",
            TypeError::ReturnOutsideFunction => "ReturnOutsideFunction",
            TypeError::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            TypeError::NonBasicPrint { .. } => "NonBasicPrint",
        }
    }
}

/// Either failure kind, for callers that run the whole pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("type error: {0}")]
    Type(#[from] TypeError),
}
