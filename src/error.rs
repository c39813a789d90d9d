//! Error types for record rendering and parsing.
//!
//! Rendering itself is total under the default options: the only failures a
//! caller sees come from the layers around it.
//!
//! ## Error Categories
//!
//! - **Input Errors**: documentation JSON that is missing a required key or has
//!   the wrong shape (surfaced unchanged from `serde_json`)
//! - **Configuration Errors**: an unreadable library catalog
//! - **Delimiter Collisions**: a value that cannot be embedded safely, reported
//!   only when [`DelimiterPolicy::Reject`](crate::DelimiterPolicy::Reject) is active
//! - **Syntax Errors**: malformed record text given to the parser, with
//!   line/column information
//!
//! ## Examples
//!
//! ```rust
//! use docrecord::{from_str, Error};
//!
//! let result = from_str("{ name = ");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Documentation input could not be decoded
    #[error("Invalid documentation JSON: {0}")]
    Json(String),

    /// Library catalog could not be decoded
    #[error("Invalid catalog: {0}")]
    Config(String),

    /// Syntax error in record text
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// Record text ended early
    #[error("Unexpected end of input at line {line}, column {col}\nExpected: {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A value would close its own string literal
    #[error("Value collides with the string delimiter: {value:?}")]
    DelimiterCollision { value: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line, column and the offending line of input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::Error;
    ///
    /// let err = Error::syntax(3, 7, "expected '='", "{ name \"x\" }");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    pub fn delimiter_collision(value: &str) -> Self {
        Error::DelimiterCollision {
            value: value.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = Error::syntax(2, 5, "expected '='", "{ name }");
        let msg = err.to_string();
        assert!(msg.contains("line 2, column 5"));
        assert!(msg.contains("{ name }"));
        assert!(msg.contains("expected '='"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_delimiter_collision_shows_value() {
        let err = Error::delimiter_collision("a\"\"\"b");
        assert!(err.to_string().contains("a\\\"\\\"\\\"b"));
    }
}
