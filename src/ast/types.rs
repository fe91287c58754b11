//! Type system definitions for the AST.
//!
//! This module defines the types a program can mention or infer:
//!
//! - Basic types (`Int`, `Boolean`, `String`, `Any`)
//! - Collections over a basic element type (`Array<T>`, `MutableList<T>`)
//! - Higher-order function types (`(T1, T2) -> R`)
//!
//! Types are plain values with structural equality; the type checker
//! compares them directly.

use std::fmt::Display;

/// The element-level types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Int,
    Boolean,
    String,
    Any,
}

impl Display for BasicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasicType::Int => write!(f, "Int"),
            BasicType::Boolean => write!(f, "Boolean"),
            BasicType::String => write!(f, "String"),
            BasicType::Any => write!(f, "Any"),
        }
    }
}

/// A type as written in an annotation or inferred by the type checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Basic(BasicType),
    Array(BasicType),
    MutableList(BasicType),
    /// Parameter types are kept in declaration order.
    Function {
        parameters: Vec<Type>,
        return_type: Box<Type>,
    },
}

pub const INT: Type = Type::Basic(BasicType::Int);
pub const BOOLEAN: Type = Type::Basic(BasicType::Boolean);
pub const STRING: Type = Type::Basic(BasicType::String);
pub const ANY: Type = Type::Basic(BasicType::Any);

impl Type {
    pub fn function(parameters: Vec<Type>, return_type: Type) -> Self {
        Type::Function {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Type::Basic(_))
    }

    /// Returns the element type of a collection, or `None` for anything
    /// that cannot be iterated.
    pub fn element_type(&self) -> Option<Type> {
        match self {
            Type::Array(element) | Type::MutableList(element) => Some(Type::Basic(*element)),
            Type::Basic(_) | Type::Function { .. } => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Basic(basic) => write!(f, "{}", basic),
            Type::Array(element) => write!(f, "Array<{}>", element),
            Type::MutableList(element) => write!(f, "MutableList<{}>", element),
            Type::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .iter()
                    .map(|parameter| parameter.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "({}) -> {}", parameters, return_type)
            }
        }
    }
}
