//! Implements GroupSource from local YAML files.
//!
//! Every `*.yml` and `*.yaml` file in the directory maps group name to
//! member list. Files merge in sorted filename order, last writer wins
//! per key. A missing directory yields an empty directory; a malformed
//! file is fatal since group definitions are repository-authored config.

use crate::domain::{DomainError, GroupDirectory};
use crate::ports::GroupSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// YAML-file group-definition source.
pub struct GroupFiles {
    dir: PathBuf,
}

impl GroupFiles {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn is_group_file(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        )
    }
}

#[async_trait::async_trait]
impl GroupSource for GroupFiles {
    async fn load_groups(&self) -> Result<GroupDirectory, DomainError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(rd) => rd,
            Err(_) => {
                info!(dir = %self.dir.display(), "no groups directory; directory is empty");
                return Ok(GroupDirectory::new());
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::GroupSource(format!("read dir: {}", e)))?
        {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file && Self::is_group_file(&path) {
                files.push(path);
            }
        }
        // Deterministic merge order regardless of read_dir ordering.
        files.sort();

        let mut directory = GroupDirectory::new();
        for path in files {
            let text = fs::read_to_string(&path)
                .await
                .map_err(|e| {
                    DomainError::GroupSource(format!("read {}: {}", path.display(), e))
                })?;
            let mapping: HashMap<String, Vec<String>> =
                serde_yaml::from_str(&text).map_err(|e| {
                    DomainError::GroupSource(format!("parse {}: {}", path.display(), e))
                })?;
            debug!(file = %path.display(), groups = mapping.len(), "merging group file");
            directory.merge(mapping);
        }

        info!(groups = directory.len(), "group directory loaded");
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_yields_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let source = GroupFiles::new(tmp.path().join("nope"));
        let dir = source.load_groups().await.unwrap();
        assert!(dir.is_empty());
    }

    #[tokio::test]
    async fn test_directory_without_group_files_yields_empty() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("readme.txt"), "not yaml").unwrap();
        let source = GroupFiles::new(tmp.path());
        let dir = source.load_groups().await.unwrap();
        assert!(dir.is_empty());
    }

    #[tokio::test]
    async fn test_loads_both_yml_and_yaml_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.yml"), "reviewers:\n  - alice\n").unwrap();
        std::fs::write(tmp.path().join("b.yaml"), "docs:\n  - dana\n").unwrap();

        let source = GroupFiles::new(tmp.path());
        let dir = source.load_groups().await.unwrap();

        assert_eq!(dir.members("reviewers"), Some(&["alice".to_string()][..]));
        assert_eq!(dir.members("docs"), Some(&["dana".to_string()][..]));
    }

    #[tokio::test]
    async fn test_later_file_overwrites_earlier_key() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("01-base.yml"), "reviewers:\n  - alice\n").unwrap();
        std::fs::write(
            tmp.path().join("02-override.yml"),
            "reviewers:\n  - bob\n  - carol\n",
        )
        .unwrap();

        let source = GroupFiles::new(tmp.path());
        let dir = source.load_groups().await.unwrap();

        assert_eq!(
            dir.members("reviewers"),
            Some(&["bob".to_string(), "carol".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_subdirectory_with_yaml_name_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("team.yml")).unwrap();
        std::fs::write(tmp.path().join("real.yml"), "reviewers:\n  - alice\n").unwrap();

        let source = GroupFiles::new(tmp.path());
        let dir = source.load_groups().await.unwrap();

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.members("reviewers"), Some(&["alice".to_string()][..]));
    }

    #[tokio::test]
    async fn test_malformed_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("bad.yml"), "reviewers: {not: [a list\n").unwrap();

        let source = GroupFiles::new(tmp.path());
        let err = source.load_groups().await.unwrap_err();
        assert!(matches!(err, DomainError::GroupSource(_)));
    }

    #[tokio::test]
    async fn test_member_order_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("team.yml"),
            "reviewers:\n  - zoe\n  - alice\n  - mike\n",
        )
        .unwrap();

        let source = GroupFiles::new(tmp.path());
        let dir = source.load_groups().await.unwrap();

        assert_eq!(
            dir.members("reviewers"),
            Some(
                &[
                    "zoe".to_string(),
                    "alice".to_string(),
                    "mike".to_string()
                ][..]
            )
        );
    }
}
