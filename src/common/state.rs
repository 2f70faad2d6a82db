use std::sync::Arc;

use tokio::sync::watch;

use crate::config::Config;

/// Server lifecycle phase, advanced by the startup and shutdown hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Stopped,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    phase: Arc<watch::Sender<Phase>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (phase, _) = watch::channel(Phase::NotStarted);
        Self {
            config: Arc::new(config),
            phase: Arc::new(phase),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Watch phase transitions.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    pub(crate) fn set_phase(&self, phase: Phase) {
        let previous = self.phase.send_replace(phase);
        tracing::debug!(from = ?previous, to = ?phase, "Lifecycle phase changed");
    }
}
