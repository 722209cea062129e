use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{MirrorState, ProjectId, RepositoryName};

/// The reason recorded for a repository that has no clone URL.
pub const NO_CLONE_URL: &str = "no clone URL";

/// The result of processing one listed repository.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum CloneStatus {
    /// The repository was cloned.
    Cloned,

    /// The repository was not attempted.
    Skipped(String),

    /// The clone attempt failed, with the diagnostic text of the tool.
    Failed(String),
}

impl Display for CloneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloneStatus::Cloned => write!(f, "cloned"),
            CloneStatus::Skipped(reason) => write!(f, "skipped ({reason})"),
            CloneStatus::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// The outcome of processing one listed repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    repository_name: RepositoryName,
    status: CloneStatus,
}

impl CloneOutcome {
    /// Creates a new `CloneOutcome` instance.
    pub fn new(repository_name: &RepositoryName, status: CloneStatus) -> Self {
        Self {
            repository_name: repository_name.to_owned(),
            status,
        }
    }

    /// Retrieves the repository name.
    pub fn repository_name(&self) -> &RepositoryName {
        &self.repository_name
    }

    /// Retrieves the status.
    pub fn status(&self) -> &CloneStatus {
        &self.status
    }

    /// Whether the repository was cloned.
    pub fn is_cloned(&self) -> bool {
        matches!(self.status, CloneStatus::Cloned)
    }

    /// Whether the repository was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self.status, CloneStatus::Skipped(_))
    }

    /// Whether the clone attempt failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.status, CloneStatus::Failed(_))
    }
}

impl Display for CloneOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Repository: {}, Status: {}", self.repository_name, self.status)
    }
}

/// The report of a mirror run that was not aborted.
#[derive(Debug, Clone)]
pub struct MirrorReport {
    /// The mirrored project.
    project_id: ProjectId,

    /// One outcome per listed repository, in listing order.
    outcomes: Vec<CloneOutcome>,

    /// The terminal state of the run.
    state: MirrorState,

    /// When the run started.
    started_at: DateTime<Utc>,

    /// When the run finished.
    finished_at: DateTime<Utc>,
}

impl MirrorReport {
    /// Creates a new `MirrorReport` instance.
    pub fn new(
        project_id: &ProjectId,
        outcomes: Vec<CloneOutcome>,
        state: MirrorState,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            project_id: project_id.to_owned(),
            outcomes,
            state,
            started_at,
            finished_at,
        }
    }

    /// Retrieves the project identifier.
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Retrieves the outcomes.
    pub fn outcomes(&self) -> &[CloneOutcome] {
        &self.outcomes
    }

    /// Retrieves the terminal state.
    pub fn state(&self) -> MirrorState {
        self.state
    }

    /// Retrieves the elapsed time of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Counts the cloned repositories.
    pub fn total_cloned(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_cloned()).count()
    }

    /// Counts the skipped repositories.
    pub fn total_skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Counts the failed repositories.
    pub fn total_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Returns the summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "Project: {}, State: {}, Repositories: total={}, cloned={}, skipped={}, failed={}, Elapsed: {}ms",
            self.project_id,
            self.state,
            self.outcomes.len(),
            self.total_cloned(),
            self.total_skipped(),
            self.total_failed(),
            self.elapsed().num_milliseconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_each_status() {
        let now = Utc::now();
        let report = MirrorReport::new(
            &ProjectId("proj1".to_string()),
            vec![
                CloneOutcome::new(&RepositoryName("a".to_string()), CloneStatus::Cloned),
                CloneOutcome::new(
                    &RepositoryName("b".to_string()),
                    CloneStatus::Skipped(NO_CLONE_URL.to_string()),
                ),
                CloneOutcome::new(
                    &RepositoryName("c".to_string()),
                    CloneStatus::Failed("fatal: repository not found".to_string()),
                ),
                CloneOutcome::new(&RepositoryName("d".to_string()), CloneStatus::Cloned),
            ],
            MirrorState::Done,
            now,
            now + chrono::Duration::milliseconds(20),
        );

        assert_eq!(2, report.total_cloned());
        assert_eq!(1, report.total_skipped());
        assert_eq!(1, report.total_failed());
        assert_eq!(
            "Project: proj1, State: Done, Repositories: total=4, cloned=2, skipped=1, failed=1, Elapsed: 20ms",
            report.summary()
        );
    }
}
