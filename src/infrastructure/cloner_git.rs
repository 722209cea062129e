use std::{path::Path, process::Stdio};

use log::debug;
use tokio::process::Command;

use crate::{ClonerError, RepositoryCloner};

/// The default version-control binary.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Clones repositories by running `<binary> clone <url>` in the target directory.
///
/// The tool creates the repository subdirectory itself.
pub struct GitCloner {
    binary: String,
}

impl GitCloner {
    /// Creates a new `GitCloner` instance running the given binary.
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_BINARY)
    }
}

#[async_trait::async_trait]
impl RepositoryCloner for GitCloner {
    async fn clone_repository(
        &self,
        url: &str,
        working_directory: &Path,
    ) -> Result<(), ClonerError> {
        debug!(
            "Running '{} clone {url}' in {}",
            self.binary,
            working_directory.display()
        );
        let output = Command::new(&self.binary)
            .arg("clone")
            .arg(url)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ClonerError::Spawn(e.to_string()))?;
        if !output.status.success() {
            return Err(ClonerError::Exit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
