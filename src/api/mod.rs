//! Session layer over the geometry pipeline: settings, state transitions,
//! calculation scheduling, warning debouncing, and persistence.

mod behavior;
mod calculation_cache;
mod compute;
mod controller;
mod engine;
mod engine_config;
mod persistence;
mod reducer;
mod settings;
mod warning_debounce;

pub use behavior::{CacheBehavior, DebounceBehavior};
pub use calculation_cache::{CalculationCacheStats, PreviewCacheStats};
pub use compute::{
    ComputeBackend, ComputeDispatcher, ComputeOutcome, ComputeRequest, InlineBackend, RequestId,
    ThreadBackend, select_backend,
};
pub use controller::{CalculatorController, CalculatorControllerConfig};
pub use engine::{BorderEngine, CalculationResult};
pub use engine_config::BorderEngineConfig;
pub use persistence::{
    DEFAULT_STORAGE_KEY, MemoryStore, PersistedSettings, PersistenceDebouncer,
    SETTINGS_SCHEMA_VERSION, SettingsStore, load_settings, save_settings,
};
pub use reducer::{CalculatorState, ImageState, LastValidFields, SettingsAction, WarningState};
pub use settings::CalculatorSettings;
pub use warning_debounce::{WarningDebouncer, WarningPhase};
