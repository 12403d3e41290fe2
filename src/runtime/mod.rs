//! Runtime abstraction for system operations.
//!
//! Everything the tool does outside of talking to the index goes through
//! [`Runtime`], so commands can be exercised with a mock.
//!
//! - `fs` - writing the generated PKGBUILD
//! - `user` - the interactive version prompt

mod fs;
mod user;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

pub use user::choose_version_with_io;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    /// Create or truncate `path` and write `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    // User interaction
    /// Ask the operator to pick one of `versions`. Keeps asking until the
    /// answer is an exact match.
    fn choose_version(&self, versions: &[String]) -> Result<String>;

    // Clock
    fn today(&self) -> NaiveDate;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn choose_version(&self, versions: &[String]) -> Result<String> {
        self.choose_version_impl(versions)
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
