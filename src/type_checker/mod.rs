//! Type checking and semantic analysis module.
//!
//! This module verifies a parsed program without changing it:
//!
//! - Inferring the type of every expression
//! - Threading a persistent environment of variable bindings through statements
//! - Resolving function calls by (name, parameter types) signature
//! - Enforcing read-only bindings and where `break`, `continue` and `return` may appear
//!
//! All state that lives longer than one statement is held by a `TypeChecker`
//! session.

pub mod environment;
pub mod expr;
pub mod signatures;
pub mod stmt;
pub mod type_checker;

#[cfg(test)]
mod tests;
