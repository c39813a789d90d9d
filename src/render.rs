//! Declaration rendering.
//!
//! Turns the documentation model into record trees, bottom-up:
//!
//! - [`RecordField`]: the `{ name, definition, explanation }` record every
//!   declaration becomes
//! - [`alias_field`], [`type_field`], [`function_field`]: one per declaration kind
//! - [`union_body`]: the `= A | B x` constructor list of a union type
//! - [`module_record`], [`version_record`]: the containers
//!
//! Each function is pure. Text inside definitions (headers, indentation of
//! alias bodies and union cases) is produced here; everything outside string
//! literals is left to the [`Serializer`](crate::Serializer).
//!
//! ## Definitions
//!
//! ```rust
//! use docrecord::render::{alias_field, type_field};
//! use docrecord::{Alias, Case, RecordOptions, TypeDecl};
//!
//! let options = RecordOptions::new();
//!
//! let alias = Alias::new("Decoder", "Json.Decode.Decoder a").with_args(["a"]);
//! assert_eq!(
//!     alias_field(&alias, &options).definition,
//!     "type alias Decoder a     = Json.Decode.Decoder a"
//! );
//!
//! let maybe = TypeDecl::new("Maybe")
//!     .with_args(["a"])
//!     .with_case(Case::new("Just", ["a"]))
//!     .with_case(Case::nullary("Nothing"));
//! assert_eq!(
//!     type_field(&maybe, &options).definition,
//!     "type Maybe a     = Just a     | Nothing"
//! );
//! ```

use crate::docs::{Alias, Case, Function, Module, TypeDecl, Version};
use crate::{record, RecordMap, RecordOptions, RecordValue};

/// A rendered declaration before it is wrapped into a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    pub definition: String,
    pub explanation: String,
}

impl RecordField {
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        RecordField {
            name: name.into(),
            definition: definition.into(),
            explanation: explanation.into(),
        }
    }

    /// Builds `{ name = """…""", definition = """…""", explanation = """…""" }`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::render::RecordField;
    ///
    /// let rec = RecordField::new("f", "Int -> Int", "doc").to_record();
    /// assert_eq!(
    ///     rec.to_string(),
    ///     r#"{ name = """f""", definition = """Int -> Int""", explanation = """doc""" }"#
    /// );
    /// ```
    #[must_use]
    pub fn to_record(&self) -> RecordMap {
        record! {
            "name" => RecordValue::raw(self.name.as_str()),
            "definition" => RecordValue::raw(self.definition.as_str()),
            "explanation" => RecordValue::raw(self.explanation.as_str()),
        }
    }
}

impl From<RecordField> for RecordMap {
    fn from(field: RecordField) -> Self {
        record! {
            "name" => RecordValue::Raw(field.name),
            "definition" => RecordValue::Raw(field.definition),
            "explanation" => RecordValue::Raw(field.explanation),
        }
    }
}

/// Anything that renders to a single record.
pub trait ToRecord {
    fn to_record(&self, options: &RecordOptions) -> RecordMap;
}

/// Prefixes `line` with `width` spaces.
#[inline]
pub fn indent(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width + line.len());
    out.extend(std::iter::repeat(' ').take(width));
    out.push_str(line);
    out
}

/// `keyword name arg1 arg2 ...`
fn header(keyword: &str, name: &str, args: &[String]) -> String {
    let mut out = format!("{} {}", keyword, name);
    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }
    out
}

/// Renders `type alias Name args     = <aliased>`.
///
/// The `= <aliased>` part is indented as a single line and joined to the
/// header with one space.
pub fn alias_field(alias: &Alias, options: &RecordOptions) -> RecordField {
    let body = indent(&format!("= {}", alias.aliased), options.indent);
    let definition = format!("{} {}", header("type alias", &alias.name, &alias.args), body);

    RecordField::new(alias.name.as_str(), definition, alias.comment.as_str())
}

/// Renders `type Name args` followed by the union body, if there are cases.
pub fn type_field(decl: &TypeDecl, options: &RecordOptions) -> RecordField {
    let mut definition = header("type", &decl.name, &decl.args);

    if !decl.cases.is_empty() {
        definition.push(' ');
        definition.push_str(&union_body(&decl.cases, options));
    }

    RecordField::new(decl.name.as_str(), definition, decl.comment.as_str())
}

/// Renders constructor cases as indented `= A` / `| B x` lines joined by a
/// single space.
///
/// The first case always takes `=`, every later one `|`.
///
/// # Examples
///
/// ```rust
/// use docrecord::render::union_body;
/// use docrecord::{Case, RecordOptions};
///
/// let cases = [Case::nullary("Red"), Case::nullary("Green"), Case::nullary("Blue")];
/// assert_eq!(
///     union_body(&cases, &RecordOptions::new()),
///     "    = Red     | Green     | Blue"
/// );
/// ```
pub fn union_body(cases: &[Case], options: &RecordOptions) -> String {
    let lines: Vec<String> = cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let prefix = if index == 0 { "=" } else { "|" };
            let line = if case.args.is_empty() {
                format!("{} {}", prefix, case.name)
            } else {
                format!("{} {} {}", prefix, case.name, case.args.join(" "))
            };
            indent(&line, options.indent)
        })
        .collect();

    lines.join(" ")
}

/// Passes the signature through as the definition.
pub fn function_field(function: &Function) -> RecordField {
    RecordField::new(
        function.name.as_str(),
        function.signature.as_str(),
        function.comment.as_str(),
    )
}

/// Builds `{ name = "…", types = [ … ], functions = [ … ] }`.
///
/// `types` lists every alias first, then every union type, each group in
/// input order.
pub fn module_record(module: &Module, options: &RecordOptions) -> RecordMap {
    let types: Vec<RecordMap> = module
        .aliases
        .iter()
        .map(|alias| RecordMap::from(alias_field(alias, options)))
        .chain(
            module
                .types
                .iter()
                .map(|decl| RecordMap::from(type_field(decl, options))),
        )
        .collect();

    let functions: Vec<RecordMap> = module
        .values
        .iter()
        .map(|function| RecordMap::from(function_field(function)))
        .collect();

    record! {
        "name" => RecordValue::quoted(module.name.as_str()),
        "types" => types,
        "functions" => functions,
    }
}

/// Builds `{ number = "…", modules = [ … ] }`.
pub fn version_record(version: &Version, options: &RecordOptions) -> RecordMap {
    let modules: Vec<RecordMap> = version
        .modules
        .iter()
        .map(|module| module_record(module, options))
        .collect();

    record! {
        "number" => RecordValue::quoted(version.number.as_str()),
        "modules" => modules,
    }
}

impl ToRecord for Alias {
    fn to_record(&self, options: &RecordOptions) -> RecordMap {
        alias_field(self, options).into()
    }
}

impl ToRecord for TypeDecl {
    fn to_record(&self, options: &RecordOptions) -> RecordMap {
        type_field(self, options).into()
    }
}

impl ToRecord for Function {
    fn to_record(&self, _options: &RecordOptions) -> RecordMap {
        function_field(self).into()
    }
}

impl ToRecord for Module {
    fn to_record(&self, options: &RecordOptions) -> RecordMap {
        module_record(self, options)
    }
}

impl ToRecord for Version {
    fn to_record(&self, options: &RecordOptions) -> RecordMap {
        version_record(self, options)
    }
}

impl<T: ToRecord + ?Sized> ToRecord for &T {
    fn to_record(&self, options: &RecordOptions) -> RecordMap {
        (**self).to_record(options)
    }
}
