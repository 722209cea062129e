use std::path::Path;

use crate::ClonerError;

/// A trait for cloning a repository with an external version-control tool.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryCloner: Sync + Send {
    /// Clones the repository at `url` from within `working_directory`.
    async fn clone_repository(&self, url: &str, working_directory: &Path)
    -> Result<(), ClonerError>;
}
