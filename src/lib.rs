//! Print border geometry for the darkroom.
//!
//! Given a sheet of paper, a negative's aspect ratio, and a minimum border,
//! this crate computes the largest print that fits, where the four easel
//! blades go, and what can go wrong along the way. The [`core`] modules are
//! pure functions over plain values; the [`api`] layer adds the session
//! machinery a host UI needs: a settings reducer, cached and offloaded
//! calculation, debounced warnings, and persistence.
//!
//! ```
//! use easel_rs::{BorderEngine, BorderEngineConfig, CalculatorSettings};
//!
//! let mut engine = BorderEngine::new(BorderEngineConfig::new());
//! let result = engine.compute(&CalculatorSettings::default(), 0.5);
//! assert_eq!(result.print.width, 9.0);
//! assert_eq!(result.print.height, 6.0);
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    BorderEngine, BorderEngineConfig, CalculationResult, CalculatorController,
    CalculatorControllerConfig, CalculatorSettings, CalculatorState, MemoryStore, SettingsAction,
    SettingsStore,
};
pub use error::{EaselError, EaselResult};
