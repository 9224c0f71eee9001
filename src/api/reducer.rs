use serde::{Deserialize, Serialize};

use crate::core::{AspectRatioSelector, DEFAULT_MIN_BORDER_IN, PaperSizeSelector};

use super::CalculatorSettings;

/// Loaded image metadata carried alongside the calculator, untouched by the
/// geometry pipeline and excluded from persistence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageState {
    pub width: f64,
    pub height: f64,
    pub crop_offset_x: f64,
    pub crop_offset_y: f64,
}

/// Most recent accepted value of each free-text numeric field, used to
/// revert invalid edits instead of propagating them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastValidFields {
    pub custom_aspect_width: f64,
    pub custom_aspect_height: f64,
    pub custom_paper_width: f64,
    pub custom_paper_height: f64,
    pub min_border: f64,
}

impl Default for LastValidFields {
    fn default() -> Self {
        let defaults = CalculatorSettings::default();
        Self {
            custom_aspect_width: defaults.custom_aspect_width,
            custom_aspect_height: defaults.custom_aspect_height,
            custom_paper_width: defaults.custom_paper_width,
            custom_paper_height: defaults.custom_paper_height,
            min_border: defaults.min_border,
        }
    }
}

impl LastValidFields {
    /// Rebuilds the revert values from a settings snapshot, substituting
    /// defaults for fields the snapshot holds unusable values in. Applied
    /// after restoring persisted data of unknown provenance.
    #[must_use]
    pub fn sanitized_from(settings: &CalculatorSettings) -> Self {
        let defaults = Self::default();
        let positive = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            custom_aspect_width: positive(
                settings.custom_aspect_width,
                defaults.custom_aspect_width,
            ),
            custom_aspect_height: positive(
                settings.custom_aspect_height,
                defaults.custom_aspect_height,
            ),
            custom_paper_width: positive(settings.custom_paper_width, defaults.custom_paper_width),
            custom_paper_height: positive(
                settings.custom_paper_height,
                defaults.custom_paper_height,
            ),
            min_border: if settings.min_border.is_finite() && settings.min_border >= 0.0 {
                settings.min_border
            } else {
                DEFAULT_MIN_BORDER_IN
            },
        }
    }
}

/// Warnings currently visible to the operator, one channel per concern.
///
/// These lag the computed warnings behind the show delay; the raw computed
/// strings live on `CalculationResult`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WarningState {
    pub min_border: Option<String>,
    pub offset: Option<String>,
    pub blade: Option<String>,
    pub paper_size: Option<String>,
}

impl WarningState {
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.min_border.is_none()
            && self.offset.is_none()
            && self.blade.is_none()
            && self.paper_size.is_none()
    }
}

/// Everything a calculator session holds between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub settings: CalculatorSettings,
    pub last_valid: LastValidFields,
    pub warnings: WarningState,
    pub image: ImageState,
    generation: u64,
}

/// State transitions. Operator edits come first; the final three are issued
/// by the controller itself and never trigger recomputation loops.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    SetAspectRatio(AspectRatioSelector),
    SetPaperSize(PaperSizeSelector),
    SetCustomAspectWidth(f64),
    SetCustomAspectHeight(f64),
    SetCustomPaperWidth(f64),
    SetCustomPaperHeight(f64),
    SetMinBorder(f64),
    SetEnableOffset(bool),
    SetIgnoreMinBorder(bool),
    SetHorizontalOffset(f64),
    SetVerticalOffset(f64),
    SetShowBlades(bool),
    SetLandscape(bool),
    SetRatioFlipped(bool),
    SetImageLayout { width: f64, height: f64 },
    SetImageCropOffset { x: f64, y: f64 },
    ResetToDefaults,
    /// Replaces the settings wholesale, as when restoring a persisted
    /// session.
    RestoreSettings(CalculatorSettings),
    /// Adopts the minimum border the engine accepted, either the raw
    /// request or the fallback it reverted to.
    AdoptAcceptedMinBorder(f64),
    /// Publishes the debounced warning set.
    SetVisibleWarnings(WarningState),
}

impl CalculatorState {
    /// Monotonic settings revision. Changes exactly when a transition
    /// altered something the pipeline or the persistence layer consumes.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Pure transition: returns the state after `action`, leaving `self`
    /// untouched.
    #[must_use]
    pub fn apply(&self, action: &SettingsAction) -> Self {
        let mut next = self.clone();
        let settings_changed = next.transition(action);
        if settings_changed {
            next.generation = next.generation.wrapping_add(1);
        }
        next
    }

    fn transition(&mut self, action: &SettingsAction) -> bool {
        match *action {
            SettingsAction::SetAspectRatio(selector) => {
                self.settings.aspect_ratio = selector;
                self.settings.is_ratio_flipped = false;
                true
            }
            SettingsAction::SetPaperSize(selector) => {
                self.settings.paper_size = selector;
                self.settings.is_landscape = !selector.is_custom();
                self.settings.is_ratio_flipped = false;
                true
            }
            SettingsAction::SetCustomAspectWidth(value) => {
                self.settings.custom_aspect_width =
                    accept_positive(value, &mut self.last_valid.custom_aspect_width);
                true
            }
            SettingsAction::SetCustomAspectHeight(value) => {
                self.settings.custom_aspect_height =
                    accept_positive(value, &mut self.last_valid.custom_aspect_height);
                true
            }
            SettingsAction::SetCustomPaperWidth(value) => {
                self.settings.custom_paper_width =
                    accept_positive(value, &mut self.last_valid.custom_paper_width);
                true
            }
            SettingsAction::SetCustomPaperHeight(value) => {
                self.settings.custom_paper_height =
                    accept_positive(value, &mut self.last_valid.custom_paper_height);
                true
            }
            SettingsAction::SetMinBorder(value) => {
                // Range checking happens in the pipeline, where the sheet
                // size is known; the raw request is kept here.
                self.settings.min_border = value;
                true
            }
            SettingsAction::SetEnableOffset(enabled) => {
                self.settings.enable_offset = enabled;
                true
            }
            SettingsAction::SetIgnoreMinBorder(ignore) => {
                self.settings.ignore_min_border = ignore;
                true
            }
            SettingsAction::SetHorizontalOffset(value) => {
                self.settings.horizontal_offset = value;
                true
            }
            SettingsAction::SetVerticalOffset(value) => {
                self.settings.vertical_offset = value;
                true
            }
            SettingsAction::SetShowBlades(show) => {
                self.settings.show_blades = show;
                true
            }
            SettingsAction::SetLandscape(is_landscape) => {
                self.settings.is_landscape = is_landscape;
                true
            }
            SettingsAction::SetRatioFlipped(flipped) => {
                self.settings.is_ratio_flipped = flipped;
                true
            }
            SettingsAction::SetImageLayout { width, height } => {
                self.image.width = width;
                self.image.height = height;
                false
            }
            SettingsAction::SetImageCropOffset { x, y } => {
                self.image.crop_offset_x = x;
                self.image.crop_offset_y = y;
                false
            }
            SettingsAction::ResetToDefaults => {
                self.settings = CalculatorSettings::default();
                self.last_valid = LastValidFields::default();
                self.warnings = WarningState::default();
                self.image = ImageState::default();
                true
            }
            SettingsAction::RestoreSettings(settings) => {
                self.settings = settings;
                self.last_valid = LastValidFields::sanitized_from(&settings);
                self.warnings = WarningState::default();
                true
            }
            SettingsAction::AdoptAcceptedMinBorder(value) => {
                self.last_valid.min_border = value;
                false
            }
            SettingsAction::SetVisibleWarnings(ref warnings) => {
                self.warnings = warnings.clone();
                false
            }
        }
    }
}

/// Accepts a strictly positive edit and advances its revert value, or hands
/// back the previous accepted value for an unusable one.
fn accept_positive(value: f64, last_valid: &mut f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        *last_valid = value;
        value
    } else {
        *last_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_leave_the_previous_state_untouched() {
        let before = CalculatorState::default();
        let after = before.apply(&SettingsAction::SetMinBorder(1.0));
        assert_eq!(before.settings.min_border, 0.5);
        assert_eq!(after.settings.min_border, 1.0);
        assert_ne!(before.generation(), after.generation());
    }

    #[test]
    fn choosing_a_preset_resets_orientation_flags() {
        let state = CalculatorState::default()
            .apply(&SettingsAction::SetLandscape(false))
            .apply(&SettingsAction::SetRatioFlipped(true));
        let preset = state.apply(&SettingsAction::SetPaperSize(PaperSizeSelector::FiveBySeven));
        assert!(preset.settings.is_landscape);
        assert!(!preset.settings.is_ratio_flipped);

        let custom = preset.apply(&SettingsAction::SetPaperSize(PaperSizeSelector::Custom));
        assert!(!custom.settings.is_landscape);
    }

    #[test]
    fn invalid_custom_dimensions_revert_to_the_last_accepted() {
        let state = CalculatorState::default()
            .apply(&SettingsAction::SetCustomPaperWidth(12.0))
            .apply(&SettingsAction::SetCustomPaperWidth(f64::NAN));
        assert_eq!(state.settings.custom_paper_width, 12.0);
        assert_eq!(state.last_valid.custom_paper_width, 12.0);

        let negative = state.apply(&SettingsAction::SetCustomPaperWidth(-3.0));
        assert_eq!(negative.settings.custom_paper_width, 12.0);
    }

    #[test]
    fn min_border_requests_pass_through_unfiltered() {
        let state = CalculatorState::default().apply(&SettingsAction::SetMinBorder(-2.0));
        assert_eq!(state.settings.min_border, -2.0);
        assert_eq!(state.last_valid.min_border, 0.5);
    }

    #[test]
    fn internal_actions_do_not_advance_the_generation() {
        let state = CalculatorState::default();
        let generation = state.generation();
        let fed = state
            .apply(&SettingsAction::AdoptAcceptedMinBorder(0.75))
            .apply(&SettingsAction::SetVisibleWarnings(WarningState::default()))
            .apply(&SettingsAction::SetImageLayout {
                width: 3000.0,
                height: 2000.0,
            });
        assert_eq!(fed.generation(), generation);
        assert_eq!(fed.last_valid.min_border, 0.75);
        assert_eq!(fed.image.width, 3000.0);
    }

    #[test]
    fn restore_sanitizes_the_revert_values() {
        let mut settings = CalculatorSettings::default();
        settings.custom_paper_width = -1.0;
        settings.min_border = f64::NAN;
        let state = CalculatorState::default().apply(&SettingsAction::RestoreSettings(settings));
        assert_eq!(state.last_valid.custom_paper_width, 8.0);
        assert_eq!(state.last_valid.min_border, 0.5);
        assert_eq!(state.settings.custom_paper_width, -1.0);
    }

    #[test]
    fn reset_returns_every_field_to_defaults() {
        let state = CalculatorState::default()
            .apply(&SettingsAction::SetMinBorder(2.0))
            .apply(&SettingsAction::SetImageLayout {
                width: 100.0,
                height: 100.0,
            })
            .apply(&SettingsAction::ResetToDefaults);
        assert_eq!(state.settings, CalculatorSettings::default());
        assert_eq!(state.image, ImageState::default());
        assert!(state.warnings.is_clear());
    }
}
