use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::PackageIndex;
use super::types::{
    ArtifactRecord, ProjectResponse, ReleaseMetadata, SearchHit, SearchResponse, VersionResponse,
};
use crate::http::HttpClient;

pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// A PyPI-compatible index reached over its JSON API.
pub struct PyPi {
    pub client: HttpClient,
    pub index_url: String,
}

impl PyPi {
    #[tracing::instrument(skip(client, index_url))]
    pub fn new(client: HttpClient, index_url: Option<String>) -> Self {
        let index_url = index_url
            .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self { client, index_url }
    }

    /// `index_url` with `segments` appended, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.index_url)
            .with_context(|| format!("Invalid index URL {}", self.index_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Index URL {} cannot take a path", self.index_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_version(&self, name: &str, version: &str) -> Result<Option<VersionResponse>> {
        if version.is_empty() {
            debug!("No version to look up for {}", name);
            return Ok(None);
        }
        let url = self.endpoint(&["pypi", name, version, "json"])?;
        self.client.get_json_optional(url.as_str()).await
    }
}

#[async_trait]
impl PackageIndex for PyPi {
    /// Only versions with at least one file that is not yanked are listed.
    #[tracing::instrument(skip(self))]
    async fn package_releases(&self, name: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["pypi", name, "json"])?;
        debug!("Fetching releases of {} from {}...", name, url);

        let project: Option<ProjectResponse> = self.client.get_json_optional(url.as_str()).await?;
        match project {
            Some(project) => project
                .visible_versions()
                .with_context(|| format!("Malformed release list from {}", url)),
            None => Ok(Vec::new()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn release_data(&self, name: &str, version: &str) -> Result<Option<ReleaseMetadata>> {
        Ok(self.fetch_version(name, version).await?.map(|r| r.info))
    }

    #[tracing::instrument(skip(self))]
    async fn release_urls(&self, name: &str, version: &str) -> Result<Vec<ArtifactRecord>> {
        Ok(self
            .fetch_version(name, version)
            .await?
            .map(|r| r.urls)
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        let url = self.endpoint(&["search"])?;
        debug!("Searching {} for {:?}...", url, term);

        let response: SearchResponse = self
            .client
            .get_json_with_query(url.as_str(), &[("q", term)])
            .await
            .with_context(|| {
                format!(
                    "Search via {} failed; --search needs an index that serves a JSON search API",
                    url
                )
            })?;
        Ok(response.results)
    }
}
