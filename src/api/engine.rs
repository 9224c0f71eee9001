use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    BladeReadings, Borders, Dimensions, EaselFit, PreviewLayout, PrintGeometry, apply_offsets,
    compute_blade_readings, compute_borders, fit_print, preview_layout, resolve_easel_fit,
    validate_min_border,
};

use super::calculation_cache::{
    CalculationCache, CalculationCacheStats, CalculationKey, PreviewCache, PreviewCacheKey,
    PreviewCacheStats,
};
use super::{BorderEngineConfig, CalculatorSettings};

/// Full output of one calculation pass.
///
/// `border_percent` restates each border as a percentage of the sheet axis
/// it sits on, which is what the preview needs to place the print and blade
/// overlays without redoing the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub paper: Dimensions,
    pub print: PrintGeometry,
    pub borders: Borders,
    pub border_percent: Borders,
    pub blade_readings: BladeReadings,
    pub easel_fit: EaselFit,
    pub preview: PreviewLayout,
    pub applied_horizontal_offset: f64,
    pub applied_vertical_offset: f64,
    pub min_border_warning: Option<String>,
    pub offset_warning: Option<String>,
    pub blade_warning: Option<String>,
    pub paper_size_warning: Option<String>,
    pub last_valid_min_border: f64,
}

impl CalculationResult {
    /// Active warnings in pipeline order.
    #[must_use]
    pub fn warnings(&self) -> SmallVec<[&str; 4]> {
        let mut notes: SmallVec<[&str; 4]> = SmallVec::new();
        for warning in [
            &self.min_border_warning,
            &self.paper_size_warning,
            &self.offset_warning,
            &self.blade_warning,
        ] {
            if let Some(text) = warning {
                notes.push(text.as_str());
            }
        }
        notes
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }
}

/// Calculation orchestrator: runs the geometry pipeline over a settings
/// snapshot and memoizes complete results.
///
/// The engine is deterministic; two engines given the same snapshot produce
/// identical results, so instances can live on worker threads without
/// coordination.
#[derive(Debug)]
pub struct BorderEngine {
    config: BorderEngineConfig,
    calculation_cache: CalculationCache,
    preview_cache: PreviewCache,
}

impl BorderEngine {
    #[must_use]
    pub fn new(config: BorderEngineConfig) -> Self {
        debug!(
            calculation_entries = config.cache_behavior.calculation_entries,
            preview_entries = config.cache_behavior.preview_entries,
            "creating border engine"
        );
        Self {
            config,
            calculation_cache: CalculationCache::new(config.cache_behavior.calculation_entries),
            preview_cache: PreviewCache::new(config.cache_behavior.preview_entries),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BorderEngineConfig {
        &self.config
    }

    /// Runs the full pipeline for one settings snapshot.
    ///
    /// `last_valid_min_border` is the fallback applied when the requested
    /// minimum border is out of range; the result reports the updated value
    /// for the caller to track.
    pub fn compute(
        &mut self,
        settings: &CalculatorSettings,
        last_valid_min_border: f64,
    ) -> CalculationResult {
        let key = CalculationKey::new(settings, last_valid_min_border);
        if let Some(result) = self.calculation_cache.get(key) {
            trace!("calculation cache hit");
            return result;
        }
        let result = self.compute_uncached(settings, last_valid_min_border);
        self.calculation_cache.insert(key, result.clone());
        result
    }

    fn compute_uncached(
        &mut self,
        settings: &CalculatorSettings,
        last_valid_min_border: f64,
    ) -> CalculationResult {
        let oriented = settings.oriented_dimensions();
        let checked =
            validate_min_border(settings.min_border, oriented.paper, last_valid_min_border);
        let print = fit_print(oriented.paper, oriented.ratio, checked.min_border);
        let placement = apply_offsets(
            oriented.paper,
            print,
            checked.min_border,
            settings.horizontal_offset,
            settings.vertical_offset,
            settings.enable_offset,
            settings.ignore_min_border,
        );
        let borders = compute_borders(&placement);

        let easel_fit = resolve_easel_fit(oriented.paper);
        let (shift_x, shift_y) = easel_fit.centering_shift(oriented.paper);
        let blade_readings = compute_blade_readings(
            print,
            placement.horizontal + shift_x,
            placement.vertical + shift_y,
            &self.config.blade_tuning,
        );

        let blade_warning = blade_readings.warning.clone();
        let preview = self.preview_for(oriented.paper);
        let paper_size_warning = describe_easel_mismatch(oriented.paper, &easel_fit);

        debug!(
            print_width = print.width,
            print_height = print.height,
            paper_width = oriented.paper.width,
            paper_height = oriented.paper.height,
            min_border = checked.min_border,
            "computed border geometry"
        );

        CalculationResult {
            paper: oriented.paper,
            print,
            border_percent: Borders {
                left: percent_of(borders.left, oriented.paper.width),
                right: percent_of(borders.right, oriented.paper.width),
                top: percent_of(borders.top, oriented.paper.height),
                bottom: percent_of(borders.bottom, oriented.paper.height),
            },
            borders,
            blade_readings,
            easel_fit,
            preview,
            applied_horizontal_offset: placement.horizontal,
            applied_vertical_offset: placement.vertical,
            min_border_warning: checked.warning,
            offset_warning: placement.warning,
            blade_warning,
            paper_size_warning,
            last_valid_min_border: checked.last_valid,
        }
    }

    fn preview_for(&mut self, paper: Dimensions) -> PreviewLayout {
        let key = PreviewCacheKey::new(paper);
        if let Some(layout) = self.preview_cache.get(key) {
            return layout;
        }
        let layout = preview_layout(paper, &self.config.preview_tuning);
        self.preview_cache.insert(key, layout);
        layout
    }

    #[must_use]
    pub fn calculation_cache_stats(&self) -> CalculationCacheStats {
        self.calculation_cache.stats()
    }

    #[must_use]
    pub fn preview_cache_stats(&self) -> PreviewCacheStats {
        self.preview_cache.stats()
    }

    pub fn clear_caches(&mut self) {
        self.calculation_cache.clear();
        self.preview_cache.clear();
    }
}

fn percent_of(value: f64, basis: f64) -> f64 {
    if basis > 0.0 { value / basis * 100.0 } else { 0.0 }
}

fn describe_easel_mismatch(paper: Dimensions, fit: &EaselFit) -> Option<String> {
    if !fit.is_non_standard_paper_size {
        return None;
    }
    if fit.easel_size == paper {
        return Some("sheet is larger than the largest standard easel slot".to_string());
    }
    Some(format!(
        "no exact easel slot for this sheet; center it in the {:.0}x{:.0} opening",
        fit.effective_slot.width, fit.effective_slot.height
    ))
}
