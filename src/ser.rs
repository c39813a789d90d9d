//! Record literal serialization.
//!
//! This module provides the [`Serializer`] that writes a record tree
//! ([`RecordMap`] / [`RecordValue`]) as text. It is the only place that knows
//! the punctuation of the format:
//!
//! - Records: `{ key = value, key = value }`
//! - Lists: `[ record, record ]`, and `[  ]` when empty
//! - Quoted strings: `"text"`
//! - Raw strings: `"""text"""`
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use docrecord::{to_string, Version};
//!
//! let version = Version::new("1.0.0", vec![]);
//! assert_eq!(to_string(&version).unwrap(), r#"{ number = "1.0.0", modules = [  ] }"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use docrecord::{record, RecordOptions, RecordValue, Serializer};
//!
//! let mut serializer = Serializer::new(RecordOptions::new());
//! serializer
//!     .write_record(&record! { "name" => RecordValue::raw("f") })
//!     .unwrap();
//! assert_eq!(serializer.into_inner(), r#"{ name = """f""" }"#);
//! ```

use crate::{DelimiterPolicy, Error, RecordMap, RecordOptions, RecordValue, Result};

const RAW_DELIMITER: &str = "\"\"\"";

/// The record text writer.
///
/// Appends to an internal buffer; call [`Serializer::into_inner`] to take the
/// finished text.
pub struct Serializer {
    output: String,
    options: RecordOptions,
}

impl Serializer {
    pub fn new(options: RecordOptions) -> Self {
        // Module records with their declarations are usually a few KiB
        Serializer {
            output: String::with_capacity(1024),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    #[must_use]
    pub fn options(&self) -> &RecordOptions {
        &self.options
    }

    /// Writes `{ key = value, ... }`.
    pub fn write_record(&mut self, record: &RecordMap) -> Result<()> {
        self.output.push_str("{ ");
        for (index, (key, value)) in record.iter().enumerate() {
            if index > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(key);
            self.output.push_str(" = ");
            self.write_value(value)?;
        }
        self.output.push_str(" }");
        Ok(())
    }

    pub fn write_value(&mut self, value: &RecordValue) -> Result<()> {
        match value {
            RecordValue::Quoted(s) => self.write_quoted(s),
            RecordValue::Raw(s) => self.write_raw(s),
            RecordValue::List(items) => self.write_list(items),
        }
    }

    fn write_list(&mut self, items: &[RecordMap]) -> Result<()> {
        self.output.push_str("[ ");
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.output.push_str(", ");
            }
            self.write_record(item)?;
        }
        self.output.push_str(" ]");
        Ok(())
    }

    fn write_quoted(&mut self, s: &str) -> Result<()> {
        self.output.push('"');
        match self.options.delimiters {
            DelimiterPolicy::Verbatim => self.output.push_str(s),
            DelimiterPolicy::Escape => self.write_escaped(s),
            DelimiterPolicy::Reject => {
                if s.contains('"') {
                    return Err(Error::delimiter_collision(s));
                }
                self.output.push_str(s);
            }
        }
        self.output.push('"');
        Ok(())
    }

    fn write_raw(&mut self, s: &str) -> Result<()> {
        self.output.push_str(RAW_DELIMITER);
        match self.options.delimiters {
            DelimiterPolicy::Verbatim => self.output.push_str(s),
            DelimiterPolicy::Escape => self.write_escaped(s),
            DelimiterPolicy::Reject => {
                if raw_collides(s) {
                    return Err(Error::delimiter_collision(s));
                }
                self.output.push_str(s);
            }
        }
        self.output.push_str(RAW_DELIMITER);
        Ok(())
    }

    #[inline]
    fn write_escaped(&mut self, s: &str) {
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                _ => self.output.push(ch),
            }
        }
    }
}

/// A raw value collides when it contains the delimiter or its final quote
/// would merge with the closing delimiter.
#[inline]
fn raw_collides(s: &str) -> bool {
    s.contains(RAW_DELIMITER) || s.ends_with('"')
}
