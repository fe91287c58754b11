//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips, messages and the
//! conversions into the pipeline-wide `Error`.

use crate::{
    ast::{
        ast::LoopControl,
        types::{BasicType, Type, INT, STRING},
    },
    errors::errors::{Error, ErrorTip, ParseError, ParseErrorImpl, TypeError},
    type_checker::signatures::Signature,
};

#[test]
fn test_parse_error_creation() {
    let error = ParseError::new(
        ParseErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position(), 10);
    assert_eq!(
        error.get_internal_error(),
        &ParseErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_parse_error_display_includes_position() {
    let error = ParseError::new(ParseErrorImpl::EmptyInput, 0);

    assert_eq!(error.to_string(), "empty input at 0");
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = ParseError::new(
        ParseErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        0,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_missing_separator_tip() {
    let error = ParseError::new(
        ParseErrorImpl::MissingSeparator {
            token: "var".to_string(),
        },
        4,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("newline or semicolon")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_number_parse_error_tip() {
    let error = ParseError::new(
        ParseErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        0,
    );

    assert!(error.get_tip().to_string().contains("99999999999"));
}

#[test]
fn test_type_error_names() {
    let errors = [
        (
            TypeError::NotInScope {
                variable: "x".to_string(),
            },
            "NotInScope",
        ),
        (
            TypeError::ReadOnlyVariable {
                variable: "x".to_string(),
            },
            "ReadOnlyVariable",
        ),
        (TypeError::MissingElseBranch, "MissingElseBranch"),
        (TypeError::ReturnOutsideFunction, "ReturnOutsideFunction"),
        (
            TypeError::LoopControlOutsideLoop {
                control: LoopControl::Break,
            },
            "LoopControlOutsideLoop",
        ),
    ];

    for (error, name) in errors {
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_type_mismatch_message() {
    let error = TypeError::TypeMatchError {
        expected: Type::Array(BasicType::Int),
        received: STRING,
    };

    assert_eq!(
        error.to_string(),
        "types do not match: expected Array<Int>, received String"
    );
}

#[test]
fn test_function_undefined_message() {
    let error = TypeError::FunctionUndefined {
        signature: Signature::new("search", vec![INT, Type::Array(BasicType::Int)]),
    };

    assert_eq!(error.to_string(), "function search(Int, Array<Int>) undefined");
}

#[test]
fn test_loop_control_message() {
    let error = TypeError::LoopControlOutsideLoop {
        control: LoopControl::Continue,
    };

    assert_eq!(error.to_string(), "continue outside of a loop");
}

#[test]
fn test_error_from_parse_error() {
    let parse_error = ParseError::new(ParseErrorImpl::EmptyInput, 0);
    let error: Error = parse_error.clone().into();

    assert_eq!(error, Error::Parse(parse_error));
}

#[test]
fn test_error_from_type_error() {
    let error: Error = TypeError::MissingElseBranch.into();

    assert!(matches!(error, Error::Type(TypeError::MissingElseBranch)));
    assert_eq!(
        error.to_string(),
        "type error: if expression has no else branch"
    );
}
