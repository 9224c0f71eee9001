use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::core::{parse_dimension_field, parse_measurement_field};
use crate::error::EaselResult;

use super::compute::{ComputeBackend, ComputeDispatcher};
use super::engine::CalculationResult;
use super::persistence::{PersistenceDebouncer, SettingsStore, load_settings, save_settings};
use super::reducer::{CalculatorState, SettingsAction, WarningState};
use super::warning_debounce::WarningDebouncer;
use super::{BorderEngineConfig, DEFAULT_STORAGE_KEY, DebounceBehavior};

/// Controller bootstrap configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorControllerConfig {
    pub engine: BorderEngineConfig,
    pub debounce: DebounceBehavior,
    pub storage_key: String,
}

impl Default for CalculatorControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorControllerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: BorderEngineConfig::new(),
            debounce: DebounceBehavior::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    #[must_use]
    pub const fn with_engine(mut self, engine: BorderEngineConfig) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub const fn with_debounce(mut self, debounce: DebounceBehavior) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Session driver: owns the state, schedules calculations, debounces
/// warnings and persistence.
///
/// The controller is tick-driven; the host calls `tick` with the elapsed
/// time each frame and reads `state`/`latest_result` afterwards. Nothing in
/// here blocks.
pub struct CalculatorController<S: SettingsStore> {
    state: CalculatorState,
    dispatcher: ComputeDispatcher,
    store: S,
    storage_key: String,
    persist: PersistenceDebouncer,
    min_border_warning: WarningDebouncer,
    offset_warning: WarningDebouncer,
    blade_warning: WarningDebouncer,
    paper_size_warning: WarningDebouncer,
    latest: Option<CalculationResult>,
}

impl<S: SettingsStore> CalculatorController<S> {
    /// Creates a controller with the platform-selected compute backend,
    /// restoring any persisted session from the store.
    #[must_use]
    pub fn new(store: S, config: CalculatorControllerConfig) -> Self {
        let dispatcher = ComputeDispatcher::with_default_backend(config.engine);
        Self::with_dispatcher(store, config, dispatcher)
    }

    /// Creates a controller over a caller-chosen backend.
    #[must_use]
    pub fn with_backend(
        store: S,
        config: CalculatorControllerConfig,
        backend: Box<dyn ComputeBackend>,
    ) -> Self {
        let dispatcher = ComputeDispatcher::new(backend, config.engine);
        Self::with_dispatcher(store, config, dispatcher)
    }

    fn with_dispatcher(
        store: S,
        config: CalculatorControllerConfig,
        mut dispatcher: ComputeDispatcher,
    ) -> Self {
        let mut state = CalculatorState::default();
        if let Some(settings) = load_settings(&store, &config.storage_key) {
            debug!("restoring persisted calculator settings");
            state = state.apply(&SettingsAction::RestoreSettings(settings));
        }
        dispatcher.submit(&state.settings, state.last_valid.min_border);
        Self {
            state,
            dispatcher,
            store,
            storage_key: config.storage_key,
            persist: PersistenceDebouncer::new(config.debounce.persist_delay),
            min_border_warning: WarningDebouncer::new(config.debounce.warning_delay),
            offset_warning: WarningDebouncer::new(config.debounce.warning_delay),
            blade_warning: WarningDebouncer::new(config.debounce.warning_delay),
            paper_size_warning: WarningDebouncer::new(config.debounce.warning_delay),
            latest: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub fn latest_result(&self) -> Option<&CalculationResult> {
        self.latest.as_ref()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Applies an action; a settings change schedules a recalculation and
    /// arms the persistence debouncer.
    pub fn dispatch(&mut self, action: SettingsAction) {
        let before = self.state.generation();
        self.state = self.state.apply(&action);
        if self.state.generation() != before {
            trace!(generation = self.state.generation(), "settings changed");
            self.dispatcher
                .submit(&self.state.settings, self.state.last_valid.min_border);
            self.persist.mark_dirty();
        }
    }

    /// Advances the session by `delta`: collects finished calculations,
    /// matures warning and persistence timers.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(outcome) = self.dispatcher.poll() {
            self.absorb_result(outcome.result);
        }

        let mut shown = false;
        shown |= self.min_border_warning.tick(delta);
        shown |= self.offset_warning.tick(delta);
        shown |= self.blade_warning.tick(delta);
        shown |= self.paper_size_warning.tick(delta);
        if shown {
            self.publish_visible_warnings();
        }

        if self.persist.tick(delta) {
            self.write_settings();
        }
    }

    /// Writes any pending settings immediately, for shutdown paths.
    pub fn flush(&mut self) {
        if self.persist.flush() {
            self.write_settings();
        }
    }

    fn absorb_result(&mut self, result: CalculationResult) {
        if result.last_valid_min_border != self.state.last_valid.min_border {
            self.state = self.state.apply(&SettingsAction::AdoptAcceptedMinBorder(
                result.last_valid_min_border,
            ));
        }

        let mut cleared = false;
        cleared |= self
            .min_border_warning
            .observe(result.min_border_warning.as_deref());
        cleared |= self.offset_warning.observe(result.offset_warning.as_deref());
        cleared |= self.blade_warning.observe(result.blade_warning.as_deref());
        cleared |= self
            .paper_size_warning
            .observe(result.paper_size_warning.as_deref());
        if cleared {
            self.publish_visible_warnings();
        }

        self.latest = Some(result);
    }

    fn publish_visible_warnings(&mut self) {
        let visible = WarningState {
            min_border: self.min_border_warning.visible().map(str::to_owned),
            offset: self.offset_warning.visible().map(str::to_owned),
            blade: self.blade_warning.visible().map(str::to_owned),
            paper_size: self.paper_size_warning.visible().map(str::to_owned),
        };
        if visible != self.state.warnings {
            self.state = self.state.apply(&SettingsAction::SetVisibleWarnings(visible));
        }
    }

    fn write_settings(&mut self) {
        match save_settings(&mut self.store, &self.storage_key, &self.state.settings) {
            Ok(()) => trace!("persisted calculator settings"),
            Err(err) => warn!(error = %err, "failed to persist calculator settings"),
        }
    }

    /// Free-text entry for the minimum border field. A value that does not
    /// parse leaves the state untouched and reports why.
    pub fn enter_min_border_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_measurement_field(input, "minimum border")?;
        self.dispatch(SettingsAction::SetMinBorder(value));
        Ok(())
    }

    pub fn enter_custom_paper_width_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_dimension_field(input, "paper width")?;
        self.dispatch(SettingsAction::SetCustomPaperWidth(value));
        Ok(())
    }

    pub fn enter_custom_paper_height_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_dimension_field(input, "paper height")?;
        self.dispatch(SettingsAction::SetCustomPaperHeight(value));
        Ok(())
    }

    pub fn enter_custom_aspect_width_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_dimension_field(input, "ratio width")?;
        self.dispatch(SettingsAction::SetCustomAspectWidth(value));
        Ok(())
    }

    pub fn enter_custom_aspect_height_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_dimension_field(input, "ratio height")?;
        self.dispatch(SettingsAction::SetCustomAspectHeight(value));
        Ok(())
    }

    pub fn enter_horizontal_offset_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_measurement_field(input, "horizontal offset")?;
        self.dispatch(SettingsAction::SetHorizontalOffset(value));
        Ok(())
    }

    pub fn enter_vertical_offset_text(&mut self, input: &str) -> EaselResult<()> {
        let value = parse_measurement_field(input, "vertical offset")?;
        self.dispatch(SettingsAction::SetVerticalOffset(value));
        Ok(())
    }
}
