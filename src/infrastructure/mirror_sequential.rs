use std::{path::Path, sync::Arc};

use chrono::Utc;
use log::info;

use crate::{
    CloneOutcome, CloneStatus, MirrorError, MirrorEvent, MirrorObserver, MirrorReport,
    MirrorState, NO_CLONE_URL, ProjectHandle, RepositoryCloner, RepositoryDescriptor,
    RepositoryLister, RepositoryMirror, StdResult, ensure_directory,
};

/// A mirror that lists a project once and clones its repositories one after another.
///
/// A failing clone is recorded in its outcome and never stops the batch; only a listing
/// failure or a directory bootstrap failure aborts the run.
pub struct SequentialMirror {
    lister: Arc<dyn RepositoryLister>,
    cloner: Arc<dyn RepositoryCloner>,
    observer: Arc<dyn MirrorObserver>,
}

impl SequentialMirror {
    /// Creates a new `SequentialMirror` instance with the given lister, cloner and observer.
    pub fn new(
        lister: Arc<dyn RepositoryLister>,
        cloner: Arc<dyn RepositoryCloner>,
        observer: Arc<dyn MirrorObserver>,
    ) -> Self {
        Self {
            lister,
            cloner,
            observer,
        }
    }

    fn abort(&self, state: &mut MirrorState, error: MirrorError) -> anyhow::Error {
        if let Err(e) = state.advance(MirrorState::Aborted) {
            return e;
        }
        self.observer.notify(&MirrorEvent::BatchAborted {
            reason: error.to_string(),
        });

        error.into()
    }

    async fn run_clone_tool(&self, url: &str, target_directory: &Path) -> CloneStatus {
        let cloner = Arc::clone(&self.cloner);
        let url = url.to_string();
        let target_directory = target_directory.to_path_buf();
        let task =
            tokio::spawn(async move { cloner.clone_repository(&url, &target_directory).await });

        match task.await {
            Ok(Ok(())) => CloneStatus::Cloned,
            Ok(Err(e)) => CloneStatus::Failed(e.diagnostic()),
            Err(e) => CloneStatus::Failed(format!("Unexpected error: {e}")),
        }
    }

    async fn clone_repository(
        &self,
        repository: &RepositoryDescriptor,
        target_directory: &Path,
    ) -> CloneOutcome {
        let name = repository.name();
        let status = match repository.clone_url() {
            Some(url) => {
                self.observer.notify(&MirrorEvent::RepositoryCloning {
                    name: name.to_owned(),
                    url: url.to_string(),
                });
                self.run_clone_tool(url, target_directory).await
            }
            None => CloneStatus::Skipped(NO_CLONE_URL.to_string()),
        };
        self.observer.notify(&match &status {
            CloneStatus::Cloned => MirrorEvent::RepositoryCloned {
                name: name.to_owned(),
            },
            CloneStatus::Skipped(reason) => MirrorEvent::RepositorySkipped {
                name: name.to_owned(),
                reason: reason.to_owned(),
            },
            CloneStatus::Failed(reason) => MirrorEvent::RepositoryFailed {
                name: name.to_owned(),
                reason: reason.to_owned(),
            },
        });

        CloneOutcome::new(name, status)
    }
}

#[async_trait::async_trait]
impl RepositoryMirror for SequentialMirror {
    async fn mirror(
        &self,
        project: &ProjectHandle,
        target_directory: &Path,
    ) -> StdResult<MirrorReport> {
        let started_at = Utc::now();
        let mut state = MirrorState::default();
        state.advance(MirrorState::Listing)?;
        self.observer.notify(&MirrorEvent::ListingStarted {
            project_id: project.project_id().to_owned(),
        });

        let repositories = match self.lister.list(project).await {
            Ok(repositories) => repositories,
            Err(e) => return Err(self.abort(&mut state, MirrorError::Listing(e))),
        };
        self.observer.notify(&MirrorEvent::ListingCompleted {
            total: repositories.len(),
        });
        if repositories.is_empty() {
            state.advance(MirrorState::EmptyDone)?;
            info!("No repositories found for project '{}'", project.project_id());

            return Ok(MirrorReport::new(
                project.project_id(),
                vec![],
                state,
                started_at,
                Utc::now(),
            ));
        }

        match ensure_directory(target_directory).await {
            Ok(true) => self.observer.notify(&MirrorEvent::DirectoryCreated {
                path: target_directory.to_path_buf(),
            }),
            Ok(false) => {}
            Err(e) => return Err(self.abort(&mut state, e)),
        }

        state.advance(MirrorState::Cloning)?;
        let mut outcomes = Vec::with_capacity(repositories.len());
        for repository in &repositories {
            outcomes.push(self.clone_repository(repository, target_directory).await);
        }
        state.advance(MirrorState::Done)?;

        let report = MirrorReport::new(
            project.project_id(),
            outcomes,
            state,
            started_at,
            Utc::now(),
        );
        self.observer.notify(&MirrorEvent::BatchDone {
            cloned: report.total_cloned(),
            skipped: report.total_skipped(),
            failed: report.total_failed(),
        });

        Ok(report)
    }
}
