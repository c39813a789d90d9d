//! # docrecord
//!
//! Converts package documentation into record-literal text for indexing.
//!
//! ## What goes in
//!
//! The `documentation.json` of a package release: a list of modules, each with
//! its type aliases, union types and values. See [`docs`] for the model.
//!
//! ## What comes out
//!
//! One line of record text per release:
//!
//! ```text
//! { number = "1.0.0", modules = [ { name = "Color", types = [ { name = """Color""", definition = """type Color     = Red     | Green""", explanation = """""" } ], functions = [  ] } ] }
//! ```
//!
//! Every declaration becomes `{ name, definition, explanation }` with
//! triple-quoted values; modules and versions wrap them in lists. The exact
//! grammar is described in [`format`].
//!
//! ## Quick Start
//!
//! ```rust
//! use docrecord::{to_string, version_from_json};
//!
//! let json = r#"[{
//!     "name": "Color",
//!     "comment": "",
//!     "aliases": [],
//!     "types": [{"name": "Color", "comment": "", "args": [],
//!                "cases": [["Red", []], ["Green", []]]}],
//!     "values": [{"name": "toHex", "comment": "To hex.", "type": "Color -> String"}]
//! }]"#;
//!
//! let version = version_from_json("1.0.0", json).unwrap();
//! let text = to_string(&version).unwrap();
//!
//! assert!(text.starts_with(r#"{ number = "1.0.0", modules = [ { name = "Color", types = [ "#));
//! assert!(text.contains(r#"definition = """type Color     = Red     | Green""""#));
//! assert!(text.contains(r#"{ name = """toHex""", definition = """Color -> String""", explanation = """To hex.""" }"#));
//! ```
//!
//! ## Delimiters
//!
//! Values are embedded without escaping, so a comment containing `"""`
//! produces text that no longer parses. That output is kept for
//! compatibility; [`DelimiterPolicy`] offers escaping or rejection instead.
//!
//! ## Command line
//!
//! The `docrecord` binary renders single documentation files or a whole
//! [`Catalog`] of packages into a `{"docs": [...]}` JSON document.

pub mod catalog;
pub mod de;
pub mod docs;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod ser;
pub mod value;

pub use catalog::{Catalog, DocsCollection, LibrarySpec, PackageDocs};
pub use de::Parser;
pub use docs::{Alias, Case, Function, Module, TypeDecl, Version};
pub use error::{Error, Result};
pub use map::RecordMap;
pub use options::{DelimiterPolicy, RecordOptions};
pub use render::{RecordField, ToRecord};
pub use ser::Serializer;
pub use value::RecordValue;

use std::io;

/// Renders a declaration, module or version to record text.
///
/// # Examples
///
/// ```rust
/// use docrecord::{to_string, Function};
///
/// let f = Function::new("f", "Int -> Int").with_comment("doc");
/// assert_eq!(
///     to_string(&f).unwrap(),
///     r#"{ name = """f""", definition = """Int -> Int""", explanation = """doc""" }"#
/// );
/// ```
///
/// # Errors
///
/// None with the default options; the `Result` exists for
/// [`to_string_with_options`] under [`DelimiterPolicy::Reject`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + ToRecord,
{
    to_string_with_options(value, &RecordOptions::default())
}

/// Renders to record text with custom options.
///
/// # Examples
///
/// ```rust
/// use docrecord::{to_string_with_options, DelimiterPolicy, Function, RecordOptions};
///
/// let f = Function::new("f", "a").with_comment(r#"Use """ carefully"#);
/// let options = RecordOptions::new().with_delimiters(DelimiterPolicy::Reject);
/// assert!(to_string_with_options(&f, &options).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::DelimiterCollision`] when the policy is
/// [`DelimiterPolicy::Reject`] and a value cannot be embedded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &RecordOptions) -> Result<String>
where
    T: ?Sized + ToRecord,
{
    let record = value.to_record(options);
    let mut serializer = Serializer::new(options.clone());
    serializer.write_record(&record)?;
    Ok(serializer.into_inner())
}

/// Builds the record tree without writing it.
#[must_use]
pub fn to_record<T>(value: &T) -> RecordMap
where
    T: ?Sized + ToRecord,
{
    value.to_record(&RecordOptions::default())
}

/// Writes record text to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + ToRecord,
{
    to_writer_with_options(writer, value, &RecordOptions::default())
}

/// Writes record text to `writer` with custom options.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &RecordOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + ToRecord,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses record text.
///
/// # Examples
///
/// ```rust
/// use docrecord::from_str;
///
/// let rec = from_str(r#"{ number = "1.0.0", modules = [  ] }"#).unwrap();
/// assert_eq!(rec.get_str("number"), Some("1.0.0"));
/// ```
///
/// # Errors
///
/// Returns an error with line and column if the text is not a record.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<RecordMap> {
    Parser::from_str(s).parse()
}

/// Parses record text written with the given options.
///
/// # Errors
///
/// Returns an error with line and column if the text is not a record.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &RecordOptions) -> Result<RecordMap> {
    Parser::from_str(s).with_options(options).parse()
}

/// Decodes the module list of a `documentation.json` file.
///
/// # Errors
///
/// Returns [`Error::Json`] when a required key is missing or has the wrong type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn modules_from_json(json: &str) -> Result<Vec<Module>> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes the module list from a reader.
///
/// # Errors
///
/// Returns an error if reading or decoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn modules_from_reader<R>(reader: R) -> Result<Vec<Module>>
where
    R: io::Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes a `documentation.json` file as release `number`.
///
/// # Errors
///
/// Returns [`Error::Json`] when a required key is missing or has the wrong type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn version_from_json(number: &str, json: &str) -> Result<Version> {
    Ok(Version::new(number, modules_from_json(json)?))
}
