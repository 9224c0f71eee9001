use indexmap::IndexMap;

use crate::core::{AspectRatioSelector, Dimensions, PaperSizeSelector, PreviewLayout};

use super::CalculatorSettings;
use super::engine::CalculationResult;

/// Runtime metrics exposed by the in-engine calculation cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculationCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Runtime metrics exposed by the in-engine preview cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Every input that can change a calculation, quantized for hashing.
///
/// `show_blades` is deliberately absent: it only gates display, never the
/// numbers. The last accepted minimum border is present because an invalid
/// request falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct CalculationKey {
    aspect_ratio: AspectRatioSelector,
    paper_size: PaperSizeSelector,
    custom_aspect_width_nanos: i64,
    custom_aspect_height_nanos: i64,
    custom_paper_width_nanos: i64,
    custom_paper_height_nanos: i64,
    min_border_nanos: i64,
    last_valid_min_border_nanos: i64,
    enable_offset: bool,
    ignore_min_border: bool,
    horizontal_offset_nanos: i64,
    vertical_offset_nanos: i64,
    is_landscape: bool,
    is_ratio_flipped: bool,
}

impl CalculationKey {
    pub(super) fn new(settings: &CalculatorSettings, last_valid_min_border: f64) -> Self {
        Self {
            aspect_ratio: settings.aspect_ratio,
            paper_size: settings.paper_size,
            custom_aspect_width_nanos: quantize_inches(settings.custom_aspect_width),
            custom_aspect_height_nanos: quantize_inches(settings.custom_aspect_height),
            custom_paper_width_nanos: quantize_inches(settings.custom_paper_width),
            custom_paper_height_nanos: quantize_inches(settings.custom_paper_height),
            min_border_nanos: quantize_inches(settings.min_border),
            last_valid_min_border_nanos: quantize_inches(last_valid_min_border),
            enable_offset: settings.enable_offset,
            ignore_min_border: settings.ignore_min_border,
            horizontal_offset_nanos: quantize_inches(settings.horizontal_offset),
            vertical_offset_nanos: quantize_inches(settings.vertical_offset),
            is_landscape: settings.is_landscape,
            is_ratio_flipped: settings.is_ratio_flipped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct PreviewCacheKey {
    paper_width_nanos: i64,
    paper_height_nanos: i64,
}

impl PreviewCacheKey {
    pub(super) fn new(paper: Dimensions) -> Self {
        Self {
            paper_width_nanos: quantize_inches(paper.width),
            paper_height_nanos: quantize_inches(paper.height),
        }
    }
}

/// Bounded FIFO cache of full calculation results.
///
/// Insertion order doubles as eviction order; the oldest entry leaves first.
#[derive(Debug)]
pub(super) struct CalculationCache {
    entries: IndexMap<CalculationKey, CalculationResult>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl CalculationCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub(super) fn get(&mut self, key: CalculationKey) -> Option<CalculationResult> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: CalculationKey, value: CalculationResult) {
        self.misses = self.misses.saturating_add(1);
        while self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> CalculationCacheStats {
        CalculationCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Bounded FIFO cache of preview layouts, keyed by sheet size alone since
/// the preview box is fixed per engine.
#[derive(Debug)]
pub(super) struct PreviewCache {
    entries: IndexMap<PreviewCacheKey, PreviewLayout>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl PreviewCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub(super) fn get(&mut self, key: PreviewCacheKey) -> Option<PreviewLayout> {
        let value = self.entries.get(&key).copied();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: PreviewCacheKey, value: PreviewLayout) {
        self.misses = self.misses.saturating_add(1);
        while self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> PreviewCacheStats {
        PreviewCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Quantizes inches to integer nanos so keys hash and compare exactly.
/// Non-finite values map to reserved extremes instead of colliding with 0.0,
/// since an out-of-range border and a zero border calculate differently.
fn quantize_inches(value: f64) -> i64 {
    if value.is_nan() {
        return i64::MIN;
    }
    if value == f64::INFINITY {
        return i64::MAX;
    }
    if value == f64::NEG_INFINITY {
        return i64::MIN + 1;
    }
    let nanos = (value * 1_000_000_000.0).round();
    if nanos >= (i64::MAX as f64) {
        i64::MAX - 1
    } else if nanos <= (i64::MIN as f64) {
        i64::MIN + 2
    } else {
        nanos as i64
    }
}
