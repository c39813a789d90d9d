//! Package documentation model.
//!
//! These types mirror the `documentation.json` shape published for each
//! package release: an array of modules, each listing its type aliases, union
//! types and values. Field order in every sequence is significant and kept as
//! given.
//!
//! All required keys are required by deserialization too; a missing key is
//! reported as [`Error::Json`](crate::Error::Json) and nothing is rendered.
//!
//! ```rust
//! use docrecord::Module;
//!
//! let json = r#"[{
//!     "name": "Maybe",
//!     "comment": "",
//!     "aliases": [],
//!     "types": [{"name": "Maybe", "comment": "", "args": ["a"],
//!                "cases": [["Just", ["a"]], ["Nothing", []]]}],
//!     "values": []
//! }]"#;
//!
//! let modules: Vec<Module> = serde_json::from_str(json).unwrap();
//! assert_eq!(modules[0].types[0].cases[0].name, "Just");
//! ```

use serde::{Deserialize, Serialize};

/// A type synonym, `type alias Name a b = <aliased>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub comment: String,
    pub args: Vec<String>,
    /// Pre-formatted right-hand side. Never re-parsed.
    #[serde(rename = "type")]
    pub aliased: String,
}

/// A union type with zero or more constructor cases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub comment: String,
    pub args: Vec<String>,
    pub cases: Vec<Case>,
}

/// One constructor of a union type.
///
/// Encoded as a two-element array, `["Just", ["a"]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct Case {
    pub name: String,
    pub args: Vec<String>,
}

/// A documented value, usually a function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub comment: String,
    #[serde(rename = "type")]
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    pub aliases: Vec<Alias>,
    pub types: Vec<TypeDecl>,
    pub values: Vec<Function>,
}

/// All modules published for one release of a package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub number: String,
    pub modules: Vec<Module>,
}

impl Alias {
    pub fn new(name: impl Into<String>, aliased: impl Into<String>) -> Self {
        Alias {
            name: name.into(),
            comment: String::new(),
            args: Vec::new(),
            aliased: aliased.into(),
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        TypeDecl {
            name: name.into(),
            comment: String::new(),
            args: Vec::new(),
            cases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Case {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Case {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// A constructor without arguments.
    pub fn nullary(name: impl Into<String>) -> Self {
        Case {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

impl From<(String, Vec<String>)> for Case {
    fn from((name, args): (String, Vec<String>)) -> Self {
        Case { name, args }
    }
}

impl From<Case> for (String, Vec<String>) {
    fn from(case: Case) -> Self {
        (case.name, case.args)
    }
}

impl Function {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Function {
            name: name.into(),
            comment: String::new(),
            signature: signature.into(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            comment: String::new(),
            aliases: Vec::new(),
            types: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl Version {
    pub fn new(number: impl Into<String>, modules: Vec<Module>) -> Self {
        Version {
            number: number.into(),
            modules,
        }
    }
}
