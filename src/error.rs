//! Errors raised while resolving a package into a PKGBUILD.
//!
//! These are the failures the CLI reports as a one-line `ERROR: ...` message.
//! Transport and parsing failures are not part of this enum; they travel as
//! plain `anyhow::Error`s.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The index has no metadata for the requested (or chosen) version.
    #[error("PyPI did not return any information for version {0}")]
    VersionNotFound(String),

    /// Metadata exists but no distribution files were published.
    #[error("PyPI did not return the necessary information to create the PKGBUILD")]
    LackOfInformation,

    #[error("Selected package version had no .tar.gz sources")]
    NoSourceArchive,

    #[error("PyPI did not return needed information: {0}")]
    MissingField(&'static str),
}
