use serde::{Deserialize, Serialize};

use crate::core::{BladeReadingTuning, PreviewTuning};
use crate::error::{EaselError, EaselResult};

use super::CacheBehavior;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load engine
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderEngineConfig {
    #[serde(default = "default_blade_tuning")]
    pub blade_tuning: BladeReadingTuning,
    #[serde(default = "default_preview_tuning")]
    pub preview_tuning: PreviewTuning,
    #[serde(default = "default_cache_behavior")]
    pub cache_behavior: CacheBehavior,
}

impl Default for BorderEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BorderEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blade_tuning: default_blade_tuning(),
            preview_tuning: default_preview_tuning(),
            cache_behavior: default_cache_behavior(),
        }
    }

    /// Sets the blade reading threshold and the reported blade thickness.
    #[must_use]
    pub const fn with_blade_tuning(mut self, tuning: BladeReadingTuning) -> Self {
        self.blade_tuning = tuning;
        self
    }

    /// Sets the pixel box the sheet preview is fitted into.
    #[must_use]
    pub const fn with_preview_tuning(mut self, tuning: PreviewTuning) -> Self {
        self.preview_tuning = tuning;
        self
    }

    /// Sets entry caps for the result caches.
    #[must_use]
    pub const fn with_cache_behavior(mut self, behavior: CacheBehavior) -> Self {
        self.cache_behavior = behavior;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> EaselResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| EaselError::InvalidInput(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> EaselResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| EaselError::InvalidInput(format!("failed to parse config: {e}")))
    }
}

fn default_blade_tuning() -> BladeReadingTuning {
    BladeReadingTuning::default()
}

fn default_preview_tuning() -> PreviewTuning {
    PreviewTuning::default()
}

fn default_cache_behavior() -> CacheBehavior {
    CacheBehavior::default()
}
