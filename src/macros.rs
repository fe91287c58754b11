//! Utility macros for the scanner.
//!
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that pushes the given token and advances
/// the lexer position by the length of the literal text.
///
/// # Arguments
///
/// * `$token` - The Token to push
/// * `$value` - The literal source text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Plus), "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($token:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), ParseError> {
            lexer.push($token);
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
