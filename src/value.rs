//! Record literal values.
//!
//! A record is a [`RecordMap`] of named fields. Each field holds a
//! [`RecordValue`]:
//!
//! - [`RecordValue::Quoted`]: `"text"`, used for module names and version numbers
//! - [`RecordValue::Raw`]: `"""text"""`, used for declaration fields
//! - [`RecordValue::List`]: `[ record, record ]`
//!
//! Renderers build these values and leave all punctuation to the
//! [`Serializer`](crate::Serializer).
//!
//! ```rust
//! use docrecord::{record, RecordValue};
//!
//! let rec = record! {
//!     "name" => RecordValue::quoted("Maybe"),
//!     "types" => RecordValue::List(vec![]),
//! };
//! assert_eq!(rec.to_string(), r#"{ name = "Maybe", types = [  ] }"#);
//! ```

use crate::RecordMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordValue {
    Quoted(String),
    Raw(String),
    List(Vec<RecordMap>),
}

impl RecordValue {
    pub fn quoted(s: impl Into<String>) -> Self {
        RecordValue::Quoted(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        RecordValue::Raw(s.into())
    }

    /// Returns the text of a string value, whichever way it is quoted.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::Quoted(s) | RecordValue::Raw(s) => Some(s),
            RecordValue::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[RecordMap]> {
        match self {
            RecordValue::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, RecordValue::List(_))
    }
}

impl From<Vec<RecordMap>> for RecordValue {
    fn from(items: Vec<RecordMap>) -> Self {
        RecordValue::List(items)
    }
}

// Display uses the default options, which never fail.
impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = crate::Serializer::new(crate::RecordOptions::default());
        serializer.write_value(self).map_err(|_| fmt::Error)?;
        f.write_str(&serializer.into_inner())
    }
}

impl fmt::Display for RecordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = crate::Serializer::new(crate::RecordOptions::default());
        serializer.write_record(self).map_err(|_| fmt::Error)?;
        f.write_str(&serializer.into_inner())
    }
}
