use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use super::config::Config;
use crate::{
    index::PackageIndex,
    package::{ReleaseQuery, Resolver},
    pkgbuild,
    runtime::Runtime,
};

/// Command-line inputs of a PKGBUILD generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub name: String,
    pub version: Option<String>,
    pub output: PathBuf,
    /// Defaults to `name`
    pub output_name: Option<String>,
    pub depends: Vec<String>,
}

impl GenerateOptions {
    fn query(&self) -> ReleaseQuery {
        let query = ReleaseQuery::new(self.name.clone())
            .with_output_name(self.output_name.as_deref().unwrap_or(&self.name));
        match &self.version {
            Some(version) => query.with_version(version.clone()),
            None => query,
        }
    }
}

#[tracing::instrument(skip(runtime, index_url))]
pub async fn generate<R: Runtime + 'static>(
    runtime: R,
    options: GenerateOptions,
    index_url: Option<String>,
) -> Result<()> {
    let config = Config::new(runtime, index_url)?;
    run(options, config).await
}

/// Resolves the package, renders it and writes the PKGBUILD.
///
/// Nothing is written when resolution fails.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, I: PackageIndex>(
    options: GenerateOptions,
    config: Config<R, I>,
) -> Result<()> {
    let query = options.query();
    let resolver = Resolver::new(config.runtime, config.index);

    let mut package = resolver.resolve(&query).await?;
    package.add_dependencies(options.depends);
    println!("Got package information");

    let contents = pkgbuild::render(&package, resolver.runtime().today());
    debug!("Writing PKGBUILD to {:?}", options.output);
    resolver.runtime().write(&options.output, contents.as_bytes())?;
    println!("Written PKGBUILD");

    Ok(())
}
