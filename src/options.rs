//! Configuration options for record rendering.
//!
//! This module provides types to customize record output:
//!
//! - [`RecordOptions`]: Main configuration struct
//! - [`DelimiterPolicy`]: What to do with values that contain the string delimiter
//!
//! The defaults reproduce the established output byte for byte; only change
//! them when every consumer of the text agrees.
//!
//! ## Examples
//!
//! ```rust
//! use docrecord::{DelimiterPolicy, RecordOptions};
//!
//! // Refuse to emit text that would be mis-delimited
//! let options = RecordOptions::new().with_delimiters(DelimiterPolicy::Reject);
//! assert_eq!(options.indent, 4);
//! ```

use std::fmt;
use std::str::FromStr;

/// Handling of string values that contain their own closing delimiter.
///
/// Raw (`"""`) strings collide when the value contains `"""` or ends with
/// `"`; quoted (`"`) strings collide on any `"`.
///
/// # Examples
///
/// ```rust
/// use docrecord::DelimiterPolicy;
///
/// assert_eq!(DelimiterPolicy::default(), DelimiterPolicy::Verbatim);
/// assert_eq!("escape".parse::<DelimiterPolicy>().unwrap(), DelimiterPolicy::Escape);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DelimiterPolicy {
    /// Write values unchanged. Colliding values produce mis-delimited text.
    #[default]
    Verbatim,
    /// Backslash-escape `"` and `\` inside string literals.
    Escape,
    /// Fail with [`Error::DelimiterCollision`](crate::Error::DelimiterCollision).
    Reject,
}

impl DelimiterPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DelimiterPolicy::Verbatim => "verbatim",
            DelimiterPolicy::Escape => "escape",
            DelimiterPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for DelimiterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelimiterPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "verbatim" => Ok(DelimiterPolicy::Verbatim),
            "escape" => Ok(DelimiterPolicy::Escape),
            "reject" => Ok(DelimiterPolicy::Reject),
            other => Err(crate::Error::custom(format!(
                "unknown delimiter policy '{}' (expected verbatim, escape or reject)",
                other
            ))),
        }
    }
}

/// Configuration options for record rendering.
///
/// # Examples
///
/// ```rust
/// use docrecord::{DelimiterPolicy, RecordOptions};
///
/// let options = RecordOptions::new()
///     .with_indent(2)
///     .with_delimiters(DelimiterPolicy::Escape);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOptions {
    /// Spaces prefixed to alias definitions and union cases.
    pub indent: usize,
    pub delimiters: DelimiterPolicy,
}

impl Default for RecordOptions {
    fn default() -> Self {
        RecordOptions {
            indent: 4,
            delimiters: DelimiterPolicy::default(),
        }
    }
}

impl RecordOptions {
    /// Creates default options (4-space indent, verbatim strings).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::{DelimiterPolicy, RecordOptions};
    ///
    /// let options = RecordOptions::new();
    /// assert_eq!(options.indent, 4);
    /// assert_eq!(options.delimiters, DelimiterPolicy::Verbatim);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterPolicy) -> Self {
        self.delimiters = delimiters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in [
            DelimiterPolicy::Verbatim,
            DelimiterPolicy::Escape,
            DelimiterPolicy::Reject,
        ] {
            assert_eq!(policy.to_string().parse::<DelimiterPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_unknown_policy() {
        assert!("quote".parse::<DelimiterPolicy>().is_err());
    }
}
