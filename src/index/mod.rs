//! Package index abstraction.
//!
//! The resolver only talks to a [`PackageIndex`]; [`PyPi`] is the HTTP
//! implementation backed by the PyPI JSON API.

mod pypi;
mod types;

use anyhow::Result;
use async_trait::async_trait;

pub use pypi::{DEFAULT_INDEX_URL, PyPi};
pub use types::{ArtifactRecord, Digests, ReleaseMetadata, SearchHit};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageIndex: Send + Sync {
    /// Versions published for `name`, in index order. Empty if the package is unknown.
    async fn package_releases(&self, name: &str) -> Result<Vec<String>>;

    /// Metadata of `name` at `version`, or `None` if that version does not exist.
    async fn release_data(&self, name: &str, version: &str) -> Result<Option<ReleaseMetadata>>;

    /// Distribution files of `name` at `version`.
    async fn release_urls(&self, name: &str, version: &str) -> Result<Vec<ArtifactRecord>>;

    /// Free-text search over package descriptions.
    async fn search(&self, term: &str) -> Result<Vec<SearchHit>>;
}
