//! Package resolution: from a name (and maybe a version) to everything a
//! PKGBUILD needs.

mod picker;
mod resolver;

use std::fmt;

pub use picker::{SOURCE_ARCHIVE_SUFFIX, pick_source_archive};
pub use resolver::Resolver;

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    /// Name on the index
    pub name: String,
    /// `pkgname` of the generated PKGBUILD
    pub output_name: String,
    pub version: Option<String>,
}

impl ReleaseQuery {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            output_name: name.clone(),
            name,
            version: None,
        }
    }

    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Python runtime a package is built against, as an Arch package name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpreter {
    /// `python2`
    Legacy,
    /// `python`
    Modern,
}

impl Interpreter {
    /// Derives the runtime from an artifact's declared `python_version`.
    ///
    /// Only versions starting with `3` select the modern runtime; `source`,
    /// `any`, `py2.py3`, empty and everything else fall back to legacy.
    pub fn from_declared(python_version: Option<&str>) -> Self {
        match python_version {
            Some(v) if v.starts_with('3') => Interpreter::Modern,
            _ => Interpreter::Legacy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpreter::Legacy => "python2",
            Interpreter::Modern => "python",
        }
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved package, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    /// Name as reported by the index; used for the unpacked source directory
    pub name: String,
    pub output_name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub license: String,
    pub interpreter: Interpreter,
    pub download_url: String,
    pub md5: String,
    pub depends: Vec<String>,
}

impl ResolvedPackage {
    /// Appends extra runtime dependencies, verbatim and in order.
    pub fn add_dependencies<I, S>(&mut self, depends: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends.extend(depends.into_iter().map(Into::into));
    }
}
