use serde::Deserialize;
use std::collections::BTreeMap;

/// Release metadata (`info` object) of one package version.
///
/// Every field may be `null` on the wire; required fields are checked by the
/// resolver, not here.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    /// SPDX expression (PEP 639), used when `license` is absent or empty
    #[serde(default)]
    pub license_expression: Option<String>,
    #[serde(default)]
    pub project_urls: Option<BTreeMap<String, String>>,
}

impl ReleaseMetadata {
    /// The license string, falling back to the SPDX expression.
    ///
    /// A present but empty `license` with no expression is returned as `""`.
    pub fn license(&self) -> Option<&str> {
        prefer_non_empty(self.license.as_deref(), self.license_expression.as_deref())
    }

    /// The homepage, falling back to the `Homepage` project URL.
    ///
    /// The exact `Homepage` label wins over other spellings.
    pub fn homepage(&self) -> Option<&str> {
        non_empty(self.home_page.as_deref()).or_else(|| {
            self.project_urls.as_ref().and_then(|urls| {
                urls.get("Homepage")
                    .or_else(|| {
                        urls.iter()
                            .find(|(label, _)| label.eq_ignore_ascii_case("homepage"))
                            .map(|(_, url)| url)
                    })
                    .map(String::as_str)
            })
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Digests {
    #[serde(default)]
    pub md5: Option<String>,
}

/// A distribution file published for a release.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ArtifactRecord {
    pub filename: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub md5_digest: Option<String>,
    #[serde(default)]
    pub digests: Digests,
    /// "source", "any", "py3", "3.2", ...
    #[serde(default)]
    pub python_version: Option<String>,
}

impl ArtifactRecord {
    /// `md5_digest`, or `digests.md5` when the former is absent or empty.
    pub fn md5(&self) -> Option<&str> {
        prefer_non_empty(self.md5_digest.as_deref(), self.digests.md5.as_deref())
    }
}

/// One match of a keyword search.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Response of `/pypi/<name>/json`.
#[derive(Deserialize, Debug)]
pub(crate) struct ProjectResponse {
    /// Keyed by version; key order is kept as sent by the index.
    #[serde(default)]
    pub releases: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct ReleaseFile {
    #[serde(default)]
    yanked: bool,
}

impl ProjectResponse {
    /// Versions with at least one file that is not yanked, in index order.
    pub fn visible_versions(self) -> Result<Vec<String>, serde_json::Error> {
        let mut versions = Vec::new();
        for (version, files) in self.releases {
            let files: Vec<ReleaseFile> = serde_json::from_value(files)?;
            if files.iter().any(|f| !f.yanked) {
                versions.push(version);
            }
        }
        Ok(versions)
    }
}

/// Response of `/pypi/<name>/<version>/json`.
#[derive(Deserialize, Debug)]
pub(crate) struct VersionResponse {
    pub info: ReleaseMetadata,
    #[serde(default)]
    pub urls: Vec<ArtifactRecord>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `primary` unless it is missing or empty and `fallback` has a value.
fn prefer_non_empty<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    non_empty(primary)
        .or_else(|| non_empty(fallback))
        .or(primary)
        .or(fallback)
}
