use std::path::Path;

use crate::{MirrorReport, ProjectHandle, StdResult};

/// A trait for mirroring every repository of a remote project onto local disk.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryMirror {
    /// Lists the project repositories and clones each of them into the target directory.
    async fn mirror(&self, project: &ProjectHandle, target_directory: &Path)
    -> StdResult<MirrorReport>;
}
