use anyhow::Result;
use log::{debug, info, warn};

use super::picker::pick_source_archive;
use super::{Interpreter, ReleaseQuery, ResolvedPackage};
use crate::error::ResolveError;
use crate::index::PackageIndex;
use crate::runtime::Runtime;

/// Turns a [`ReleaseQuery`] into a [`ResolvedPackage`] using a package index.
pub struct Resolver<R: Runtime, I: PackageIndex> {
    runtime: R,
    index: I,
}

impl<R: Runtime, I: PackageIndex> Resolver<R, I> {
    pub fn new(runtime: R, index: I) -> Self {
        Self { runtime, index }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Resolves the query's version, fetches its metadata and files, and
    /// builds the package to render.
    ///
    /// Fails with a [`ResolveError`] when the index does not describe a
    /// buildable source release; other errors come from the index itself.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, query: &ReleaseQuery) -> Result<ResolvedPackage> {
        let version = match &query.version {
            Some(version) => version.clone(),
            None => self.resolve_version(&query.name).await?,
        };

        let data = self.index.release_data(&query.name, &version).await?;
        info!("Got release data for {} {}", query.name, version);
        let artifacts = self.index.release_urls(&query.name, &version).await?;
        info!("Got {} release file(s) for {} {}", artifacts.len(), query.name, version);

        let data = match data {
            Some(_) if artifacts.is_empty() => return Err(ResolveError::LackOfInformation.into()),
            Some(data) => data,
            None => return Err(ResolveError::VersionNotFound(version).into()),
        };

        let artifact = pick_source_archive(&artifacts).ok_or(ResolveError::NoSourceArchive)?;
        debug!("Using {} ({})", artifact.filename, artifact.url);

        let interpreter = Interpreter::from_declared(artifact.python_version.as_deref());
        if interpreter == Interpreter::Legacy {
            info!(
                "Declared python version {:?}, falling back to {}",
                artifact.python_version, interpreter
            );
        }

        let package = ResolvedPackage {
            name: required(data.name.as_deref(), "name")?,
            output_name: query.output_name.clone(),
            version,
            description: required(data.summary.as_deref(), "summary")?,
            homepage: data.homepage().unwrap_or_default().to_string(),
            license: required(data.license(), "license")?,
            interpreter,
            download_url: artifact.url.clone(),
            md5: required(artifact.md5(), "md5_digest")?,
            depends: Vec::new(),
        };
        info!("Resolved {} {}", package.name, package.version);

        Ok(package)
    }

    /// Picks a version when none was given: the only one, or the operator's choice.
    async fn resolve_version(&self, name: &str) -> Result<String> {
        let versions = self.index.package_releases(name).await?;

        match versions.as_slice() {
            [] => {
                warn!("No releases listed for {}", name);
                Ok(String::new())
            }
            [only] => {
                info!("Using version {}", only);
                Ok(only.clone())
            }
            _ => self.runtime.choose_version(&versions),
        }
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, ResolveError> {
    value
        .map(str::to_string)
        .ok_or(ResolveError::MissingField(field))
}
