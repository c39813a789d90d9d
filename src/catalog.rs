//! Library catalog and the `{"docs": [...]}` collection.
//!
//! The catalog says which packages and releases to convert. It is plain
//! configuration, loaded from TOML and passed to whoever drives the run:
//!
//! ```toml
//! [[library]]
//! user = "elm-lang"
//! namespace = "core"
//! versions = ["5.1.1", "5.1.0"]
//! ```
//!
//! Cached documentation for a release is read from
//! `<docs-dir>/<user>_<namespace>/<version>.json`.
//!
//! ```rust
//! use docrecord::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     [[library]]
//!     user = "elm-lang"
//!     namespace = "http"
//!     versions = ["1.0.0"]
//! "#).unwrap();
//!
//! let lib = &catalog.libraries[0];
//! assert_eq!(lib.name(), "elm-lang/http");
//! assert_eq!(
//!     lib.docs_path(Path::new("cache"), "1.0.0"),
//!     Path::new("cache").join("elm-lang_http").join("1.0.0.json")
//! );
//! ```

use crate::{to_string_with_options, Error, Module, RecordOptions, Result, Version};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
pub struct Catalog {
    #[serde(rename = "library", default)]
    pub libraries: Vec<LibrarySpec>,
}

/// One package and the releases to convert.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LibrarySpec {
    pub user: String,
    pub namespace: String,
    pub versions: Vec<String>,
}

/// Output document: every converted package with its version records.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocsCollection {
    pub docs: Vec<PackageDocs>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDocs {
    /// `user/namespace`
    pub name: String,
    /// Rendered version records, in catalog order.
    pub versions: Vec<String>,
}

impl Catalog {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}

impl LibrarySpec {
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}/{}", self.user, self.namespace)
    }

    #[must_use]
    pub fn docs_path(&self, docs_dir: &Path, version: &str) -> PathBuf {
        docs_dir
            .join(format!("{}_{}", self.user, self.namespace))
            .join(format!("{}.json", version))
    }

    /// Renders every configured version with modules supplied by `load`.
    ///
    /// `load` is called once per version, in catalog order; its first error
    /// aborts the package.
    pub fn render<F>(&self, options: &RecordOptions, mut load: F) -> Result<PackageDocs>
    where
        F: FnMut(&LibrarySpec, &str) -> Result<Vec<Module>>,
    {
        let versions = self
            .versions
            .iter()
            .map(|number| {
                let modules = load(self, number.as_str())?;
                to_string_with_options(&Version::new(number.as_str(), modules), options)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PackageDocs {
            name: self.name(),
            versions,
        })
    }
}

impl DocsCollection {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        assert_eq!(Catalog::from_toml_str("").unwrap(), Catalog::default());
    }

    #[test]
    fn test_missing_versions_is_an_error() {
        let result = Catalog::from_toml_str("[[library]]\nuser = \"a\"\nnamespace = \"b\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_render_in_catalog_order() {
        let library = LibrarySpec {
            user: "elm-lang".to_string(),
            namespace: "html".to_string(),
            versions: vec!["2.0.0".to_string(), "1.0.0".to_string()],
        };

        let mut seen = Vec::new();
        let package = library
            .render(&RecordOptions::new(), |lib, version| {
                seen.push(format!("{}@{}", lib.name(), version));
                Ok(vec![Module::new("Html")])
            })
            .unwrap();

        assert_eq!(seen, vec!["elm-lang/html@2.0.0", "elm-lang/html@1.0.0"]);
        assert_eq!(package.name, "elm-lang/html");
        assert_eq!(
            package.versions[1],
            r#"{ number = "1.0.0", modules = [ { name = "Html", types = [  ], functions = [  ] } ] }"#
        );
    }

    #[test]
    fn test_render_stops_on_load_error() {
        let library = LibrarySpec {
            user: "u".to_string(),
            namespace: "n".to_string(),
            versions: vec!["1.0.0".to_string()],
        };
        let result = library.render(&RecordOptions::new(), |_, _| Err(Error::io("missing")));
        assert!(result.is_err());
    }

    #[test]
    fn test_collection_json_shape() {
        let collection = DocsCollection {
            docs: vec![PackageDocs {
                name: "u/n".to_string(),
                versions: vec![r#"{ number = "1", modules = [  ] }"#.to_string()],
            }],
        };
        assert_eq!(
            collection.to_json().unwrap(),
            r#"{"docs":[{"name":"u/n","versions":["{ number = \"1\", modules = [  ] }"]}]}"#
        );
    }
}
