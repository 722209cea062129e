use std::path::Path;

use tokio::fs;

use crate::MirrorError;

/// Creates the directory tree at `path` if it does not exist yet.
///
/// Returns whether the directory was created by this call.
pub async fn ensure_directory(path: &Path) -> Result<bool, MirrorError> {
    if let Ok(metadata) = fs::metadata(path).await {
        if metadata.is_dir() {
            return Ok(false);
        }
    }
    fs::create_dir_all(path)
        .await
        .map_err(|source| MirrorError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn creates_missing_directory_tree() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("nested").join("mirror");

        let created = ensure_directory(&target).await.unwrap();

        assert!(created);
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn is_idempotent_on_existing_directory() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("mirror");

        let first = ensure_directory(&target).await.unwrap();
        let second = ensure_directory(&target).await.unwrap();

        assert!(first);
        assert!(!second);
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn fails_when_a_file_is_in_the_way() {
        let root = TempDir::new().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let error = ensure_directory(&blocker.join("mirror"))
            .await
            .expect_err("Directory creation should fail below a file");

        assert!(matches!(error, MirrorError::DirectoryCreation { .. }));
    }
}
