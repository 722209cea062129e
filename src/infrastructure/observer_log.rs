use log::{debug, error, info, warn};

use crate::{MirrorEvent, MirrorObserver};

/// An observer that routes mirror events to the log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl MirrorObserver for LogObserver {
    fn notify(&self, event: &MirrorEvent) {
        match event {
            MirrorEvent::RepositoryCloning { .. } => debug!("{event}"),
            MirrorEvent::RepositorySkipped { .. } | MirrorEvent::RepositoryFailed { .. } => {
                warn!("{event}")
            }
            MirrorEvent::BatchAborted { .. } => error!("{event}"),
            _ => info!("{event}"),
        }
    }
}
