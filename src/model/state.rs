use std::fmt::Display;

use serde::Serialize;

use super::{MirrorError, StdResult};

/// The lifecycle of a single mirror run.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum MirrorState {
    /// Nothing has happened yet.
    #[default]
    Idle,

    /// The repositories are being listed.
    Listing,

    /// The listing returned no repository, there was nothing to clone.
    EmptyDone,

    /// The repositories are being cloned one after another.
    Cloning,

    /// Every listed repository has an outcome.
    Done,

    /// A fatal error stopped the run.
    Aborted,
}

impl MirrorState {
    /// Whether moving from this state to `next` is allowed.
    pub fn can_transition_to(&self, next: MirrorState) -> bool {
        matches!(
            (self, next),
            (MirrorState::Idle, MirrorState::Listing)
                | (MirrorState::Listing, MirrorState::Aborted)
                | (MirrorState::Listing, MirrorState::EmptyDone)
                | (MirrorState::Listing, MirrorState::Cloning)
                | (MirrorState::Cloning, MirrorState::Done)
        )
    }

    /// Moves to `next`, failing on a transition outside of the lifecycle.
    pub fn advance(&mut self, next: MirrorState) -> StdResult<()> {
        if !self.can_transition_to(next) {
            return Err(MirrorError::InvalidTransition {
                from: *self,
                to: next,
            }
            .into());
        }
        *self = next;

        Ok(())
    }
}

impl Display for MirrorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MirrorState::Idle => "Idle",
            MirrorState::Listing => "Listing",
            MirrorState::EmptyDone => "EmptyDone",
            MirrorState::Cloning => "Cloning",
            MirrorState::Done => "Done",
            MirrorState::Aborted => "Aborted",
        };
        write!(f, "{label}")
    }
}
