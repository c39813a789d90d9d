//! Record Text Format
//!
//! This module documents the text produced by this crate. Downstream tools
//! parse it as a record-literal language, so the layout below is fixed down to
//! the byte.
//!
//! # Grammar
//!
//! ```text
//! record       := "{ " field (", " field)* " }"
//! field        := identifier " = " value
//! value        := quoted | raw | list
//! list         := "[ " [ record (", " record)* ] " ]"
//! quoted       := '"' text '"'
//! raw          := '"""' text '"""'
//! ```
//!
//! An empty list is `[  ]` (two spaces). Keys are never omitted.
//!
//! # Records
//!
//! ## Declarations
//!
//! ```text
//! { name = """<name>""", definition = """<definition>""", explanation = """<comment>""" }
//! ```
//!
//! | Kind | Definition |
//! |------|------------|
//! | Alias | `type alias Name a b` + ` ` + indent(`= <type>`) |
//! | Union type | `type Name a b` + ` ` + union body, or the header alone without cases |
//! | Function | the type signature, unchanged |
//!
//! The union body is one indented line per case, `= Ctor args` for the first
//! and `| Ctor args` for the rest, joined with single spaces. With the
//! default indent of 4:
//!
//! ```text
//! type Color     = Red     | Green     | Blue
//! type alias Id     = Int
//! ```
//!
//! ## Modules
//!
//! ```text
//! { name = "<module>", types = [ <aliases...>, <unions...> ], functions = [ <values...> ] }
//! ```
//!
//! All aliases come before all union types, each group in documentation
//! order.
//!
//! ## Versions
//!
//! ```text
//! { number = "<version>", modules = [ <modules...> ] }
//! ```
//!
//! # Strings
//!
//! Module names and version numbers use single quotes; everything taken from
//! declarations uses triple quotes. Nothing is escaped by default. A raw value
//! that contains `"""`, or ends with `"`, closes its literal early. See
//! [`DelimiterPolicy`](crate::DelimiterPolicy) for the alternatives:
//!
//! | Policy | Effect |
//! |--------|--------|
//! | `verbatim` | write as is (default) |
//! | `escape` | `"` → `\"`, `\` → `\\` inside every string |
//! | `reject` | fail with [`Error::DelimiterCollision`](crate::Error::DelimiterCollision) |
//!
//! # Collections
//!
//! A run over several packages is stored as JSON, with each version record
//! kept as an opaque string:
//!
//! ```text
//! {"docs": [{"name": "elm-lang/core", "versions": ["{ number = \"5.1.1\", modules = [ ... ] }"]}]}
//! ```
