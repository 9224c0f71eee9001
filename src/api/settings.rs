use serde::{Deserialize, Serialize};

use crate::core::{
    AspectRatioSelector, DEFAULT_MIN_BORDER_IN, Dimensions, OrientedDimensions, PaperSizeSelector,
    resolve_oriented_dimensions,
};

/// Everything the operator can set on the calculator.
///
/// This type is serializable so host applications can persist and restore a
/// session without inventing their own format. Custom dimension fields keep
/// their values while a preset is selected, so switching back to custom does
/// not lose the typed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: AspectRatioSelector,
    #[serde(default = "default_paper_size")]
    pub paper_size: PaperSizeSelector,
    #[serde(default = "default_custom_aspect_width")]
    pub custom_aspect_width: f64,
    #[serde(default = "default_custom_aspect_height")]
    pub custom_aspect_height: f64,
    #[serde(default = "default_custom_paper_width")]
    pub custom_paper_width: f64,
    #[serde(default = "default_custom_paper_height")]
    pub custom_paper_height: f64,
    #[serde(default = "default_min_border")]
    pub min_border: f64,
    #[serde(default)]
    pub enable_offset: bool,
    #[serde(default)]
    pub ignore_min_border: bool,
    #[serde(default)]
    pub horizontal_offset: f64,
    #[serde(default)]
    pub vertical_offset: f64,
    #[serde(default)]
    pub show_blades: bool,
    #[serde(default = "default_is_landscape")]
    pub is_landscape: bool,
    #[serde(default)]
    pub is_ratio_flipped: bool,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: default_aspect_ratio(),
            paper_size: default_paper_size(),
            custom_aspect_width: default_custom_aspect_width(),
            custom_aspect_height: default_custom_aspect_height(),
            custom_paper_width: default_custom_paper_width(),
            custom_paper_height: default_custom_paper_height(),
            min_border: default_min_border(),
            enable_offset: false,
            ignore_min_border: false,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            show_blades: false,
            is_landscape: default_is_landscape(),
            is_ratio_flipped: false,
        }
    }
}

impl CalculatorSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_aspect_ratio(mut self, selector: AspectRatioSelector) -> Self {
        self.aspect_ratio = selector;
        self
    }

    #[must_use]
    pub const fn with_paper_size(mut self, selector: PaperSizeSelector) -> Self {
        self.paper_size = selector;
        self
    }

    #[must_use]
    pub const fn with_custom_aspect(mut self, width: f64, height: f64) -> Self {
        self.custom_aspect_width = width;
        self.custom_aspect_height = height;
        self
    }

    #[must_use]
    pub const fn with_custom_paper(mut self, width: f64, height: f64) -> Self {
        self.custom_paper_width = width;
        self.custom_paper_height = height;
        self
    }

    #[must_use]
    pub const fn with_min_border(mut self, min_border: f64) -> Self {
        self.min_border = min_border;
        self
    }

    #[must_use]
    pub const fn with_offsets(mut self, horizontal: f64, vertical: f64) -> Self {
        self.enable_offset = true;
        self.horizontal_offset = horizontal;
        self.vertical_offset = vertical;
        self
    }

    #[must_use]
    pub const fn with_ignore_min_border(mut self, ignore: bool) -> Self {
        self.ignore_min_border = ignore;
        self
    }

    #[must_use]
    pub const fn with_landscape(mut self, is_landscape: bool) -> Self {
        self.is_landscape = is_landscape;
        self
    }

    #[must_use]
    pub const fn with_ratio_flipped(mut self, flipped: bool) -> Self {
        self.is_ratio_flipped = flipped;
        self
    }

    #[must_use]
    pub const fn with_show_blades(mut self, show: bool) -> Self {
        self.show_blades = show;
        self
    }

    #[must_use]
    pub const fn custom_paper(&self) -> Dimensions {
        Dimensions::new(self.custom_paper_width, self.custom_paper_height)
    }

    #[must_use]
    pub const fn custom_ratio(&self) -> Dimensions {
        Dimensions::new(self.custom_aspect_width, self.custom_aspect_height)
    }

    /// Paper and ratio pairs after preset lookup and the orientation flags.
    #[must_use]
    pub fn oriented_dimensions(&self) -> OrientedDimensions {
        resolve_oriented_dimensions(
            self.paper_size,
            self.custom_paper(),
            self.is_landscape,
            self.aspect_ratio,
            self.custom_ratio(),
            self.is_ratio_flipped,
        )
    }
}

fn default_aspect_ratio() -> AspectRatioSelector {
    AspectRatioSelector::ThirtyFiveMm
}

fn default_paper_size() -> PaperSizeSelector {
    PaperSizeSelector::EightByTen
}

fn default_custom_aspect_width() -> f64 {
    3.0
}

fn default_custom_aspect_height() -> f64 {
    2.0
}

fn default_custom_paper_width() -> f64 {
    8.0
}

fn default_custom_paper_height() -> f64 {
    10.0
}

fn default_min_border() -> f64 {
    DEFAULT_MIN_BORDER_IN
}

fn default_is_landscape() -> bool {
    true
}
