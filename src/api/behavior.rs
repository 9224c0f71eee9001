use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays used to coalesce bursts of edits before side effects run.
///
/// Warnings wait `warning_delay` before appearing so a slider drag does not
/// flash them; clearing is immediate. Persistence waits `persist_delay`
/// after the last settings change before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceBehavior {
    pub warning_delay: Duration,
    pub persist_delay: Duration,
}

impl Default for DebounceBehavior {
    fn default() -> Self {
        Self {
            warning_delay: Duration::from_millis(250),
            persist_delay: Duration::from_millis(400),
        }
    }
}

impl DebounceBehavior {
    #[must_use]
    pub const fn with_warning_delay(mut self, delay: Duration) -> Self {
        self.warning_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_persist_delay(mut self, delay: Duration) -> Self {
        self.persist_delay = delay;
        self
    }
}

/// Entry caps for the per-engine result caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheBehavior {
    pub calculation_entries: usize,
    pub preview_entries: usize,
}

impl Default for CacheBehavior {
    fn default() -> Self {
        Self {
            calculation_entries: 64,
            preview_entries: 64,
        }
    }
}
