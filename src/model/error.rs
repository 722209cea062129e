use std::path::PathBuf;

use thiserror::Error;

use super::MirrorState;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// A fatal error that aborts a whole mirror batch.
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The repositories could not be listed
    #[error("Listing error: {0}")]
    Listing(#[source] anyhow::Error),

    /// The target directory could not be created
    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The orchestrator attempted an illegal state change
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: MirrorState, to: MirrorState },
}

/// Cloner error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClonerError {
    /// The clone tool ran and exited with a failure status
    #[error("Clone tool exited with status {code:?}: {stderr}")]
    Exit { code: Option<i32>, stderr: String },

    /// The clone tool could not be run at all
    #[error("Clone tool could not be started: {0}")]
    Spawn(String),
}

impl ClonerError {
    /// Returns the diagnostic text recorded in a failed clone outcome.
    pub fn diagnostic(&self) -> String {
        match self {
            ClonerError::Exit { stderr, .. } => stderr.to_owned(),
            ClonerError::Spawn(message) => message.to_owned(),
        }
    }
}
