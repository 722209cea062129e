use std::{fmt::Display, path::PathBuf};

use super::{ProjectId, RepositoryName};

/// A progress event emitted by a mirror run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    /// The listing of the project repositories started.
    ListingStarted { project_id: ProjectId },

    /// The listing returned `total` repositories.
    ListingCompleted { total: usize },

    /// The target directory did not exist and was created.
    DirectoryCreated { path: PathBuf },

    /// A repository clone is about to start.
    RepositoryCloning { name: RepositoryName, url: String },

    /// A repository was cloned.
    RepositoryCloned { name: RepositoryName },

    /// A repository was skipped.
    RepositorySkipped {
        name: RepositoryName,
        reason: String,
    },

    /// A repository clone failed.
    RepositoryFailed {
        name: RepositoryName,
        reason: String,
    },

    /// Every listed repository has an outcome.
    BatchDone {
        cloned: usize,
        skipped: usize,
        failed: usize,
    },

    /// The run stopped on a fatal error.
    BatchAborted { reason: String },
}

impl Display for MirrorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MirrorEvent::ListingStarted { project_id } => {
                write!(f, "Listing repositories of project '{project_id}'")
            }
            MirrorEvent::ListingCompleted { total } => {
                write!(f, "Found {total} repositories")
            }
            MirrorEvent::DirectoryCreated { path } => {
                write!(f, "Created directory: {}", path.display())
            }
            MirrorEvent::RepositoryCloning { name, url } => {
                write!(f, "Cloning repository '{name}' from {url}")
            }
            MirrorEvent::RepositoryCloned { name } => {
                write!(f, "Cloned repository '{name}'")
            }
            MirrorEvent::RepositorySkipped { name, reason } => {
                write!(f, "Skipped repository '{name}': {reason}")
            }
            MirrorEvent::RepositoryFailed { name, reason } => {
                write!(f, "Failed to clone repository '{name}': {reason}")
            }
            MirrorEvent::BatchDone {
                cloned,
                skipped,
                failed,
            } => write!(
                f,
                "All repositories processed: cloned={cloned}, skipped={skipped}, failed={failed}"
            ),
            MirrorEvent::BatchAborted { reason } => write!(f, "Mirror aborted: {reason}"),
        }
    }
}
