use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EaselError, EaselResult};

use super::CalculatorSettings;

/// Bumped when the persisted layout changes shape incompatibly.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Default key the controller stores its settings under.
pub const DEFAULT_STORAGE_KEY: &str = "easel.border-calculator";

/// Key/value storage the host provides: browser local storage, a config
/// file, a test map. Implementations report failures instead of panicking;
/// the controller logs and carries on.
pub trait SettingsStore {
    fn get(&self, key: &str) -> EaselResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> EaselResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> EaselResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EaselResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Versioned envelope the settings are stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub settings: CalculatorSettings,
}

impl PersistedSettings {
    #[must_use]
    pub fn wrap(settings: CalculatorSettings) -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            saved_at: Utc::now(),
            settings,
        }
    }

    pub fn to_json(&self) -> EaselResult<String> {
        serde_json::to_string(self)
            .map_err(|e| EaselError::Persistence(format!("failed to serialize settings: {e}")))
    }

    pub fn from_json(input: &str) -> EaselResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| EaselError::Persistence(format!("failed to parse settings: {e}")))
    }
}

/// Loads persisted settings, treating every failure as a fresh start.
#[must_use]
pub fn load_settings(store: &dyn SettingsStore, key: &str) -> Option<CalculatorSettings> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(error = %err, "settings store read failed; starting from defaults");
            return None;
        }
    };
    let envelope = match PersistedSettings::from_json(&raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, "stored settings unreadable; starting from defaults");
            return None;
        }
    };
    if envelope.schema_version != SETTINGS_SCHEMA_VERSION {
        warn!(
            stored = envelope.schema_version,
            expected = SETTINGS_SCHEMA_VERSION,
            "stored settings use an unknown schema; starting from defaults"
        );
        return None;
    }
    Some(envelope.settings)
}

/// Writes the settings under the given key, wrapped in the version envelope.
pub fn save_settings(
    store: &mut dyn SettingsStore,
    key: &str,
    settings: &CalculatorSettings,
) -> EaselResult<()> {
    let payload = PersistedSettings::wrap(*settings).to_json()?;
    store.set(key, &payload)
}

/// Trailing-edge write debouncer: each edit restarts the countdown, one
/// write covers the whole burst. Driven by explicit ticks.
#[derive(Debug)]
pub struct PersistenceDebouncer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl PersistenceDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.remaining = Some(self.delay);
    }

    /// Advances the countdown; returns true when a write is due.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining = remaining.saturating_sub(delta);
        if remaining.is_zero() {
            self.remaining = None;
            return true;
        }
        false
    }

    /// Forces a pending write due now, for shutdown paths.
    pub fn flush(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }
}
