use crate::MirrorEvent;

/// A trait for receiving the progress events of a mirror run.
#[cfg_attr(test, mockall::automock)]
pub trait MirrorObserver: Sync + Send {
    /// Notifies the observer of an event.
    fn notify(&self, event: &MirrorEvent);
}
