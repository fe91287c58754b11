//! Error types and error handling for the front end.
//!
//! This module defines the two failure kinds a caller can observe:
//!
//! - `ParseError` for malformed source text or token streams
//! - `TypeError` for well-formed programs that break a typing rule
//!
//! Neither is ever recovered from; the first failure aborts the call.

pub mod errors;

#[cfg(test)]
mod tests;
