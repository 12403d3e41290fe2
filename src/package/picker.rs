use crate::index::ArtifactRecord;

/// Filename suffix of the only archive format the PKGBUILD template handles.
pub const SOURCE_ARCHIVE_SUFFIX: &str = ".tar.gz";

/// Picks the `.tar.gz` source distribution a PKGBUILD is built from.
///
/// With several tarballs the one listed last by the index wins. Returns
/// `None` if there is no tarball at all.
pub fn pick_source_archive(artifacts: &[ArtifactRecord]) -> Option<&ArtifactRecord> {
    artifacts
        .iter()
        .rev()
        .find(|a| a.filename.ends_with(SOURCE_ARCHIVE_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(filename: &str) -> ArtifactRecord {
        ArtifactRecord {
            filename: filename.to_string(),
            url: format!("https://files.example/{}", filename),
            ..Default::default()
        }
    }

    #[test]
    fn test_pick_last_tarball() {
        let artifacts = vec![
            artifact("pkg-1.0.tar.gz"),
            artifact("pkg-1.0-py3-none-any.whl"),
            artifact("pkg_alt-1.0.tar.gz"),
            artifact("pkg-1.0.zip"),
        ];
        let picked = pick_source_archive(&artifacts).unwrap();
        assert_eq!(picked.filename, "pkg_alt-1.0.tar.gz");
    }

    #[test]
    fn test_pick_none_without_tarball() {
        let artifacts = vec![artifact("pkg-1.0-py3-none-any.whl"), artifact("pkg-1.0.zip")];
        assert!(pick_source_archive(&artifacts).is_none());
    }

    #[test]
    fn test_pick_is_case_sensitive() {
        let artifacts = vec![artifact("PKG-1.0.TAR.GZ")];
        assert!(pick_source_archive(&artifacts).is_none());
    }

    #[test]
    fn test_pick_empty() {
        assert!(pick_source_archive(&[]).is_none());
    }
}
