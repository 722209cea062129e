use crate::{ProjectHandle, RepositoryDescriptor, StdResult};

/// A trait for listing the repositories of a remote project.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryLister: Sync + Send {
    /// Lists the repositories of the project, in the order returned by the remote service.
    async fn list(&self, project: &ProjectHandle) -> StdResult<Vec<RepositoryDescriptor>>;
}
