use serde::{Deserialize, Serialize};

use crate::core::types::Dimensions;

pub const DEFAULT_PREVIEW_MAX_WIDTH_PX: f64 = 400.0;
pub const DEFAULT_PREVIEW_MAX_HEIGHT_PX: f64 = 400.0;

/// Pixel box the sheet preview has to fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewTuning {
    pub max_width_px: f64,
    pub max_height_px: f64,
}

impl Default for PreviewTuning {
    fn default() -> Self {
        Self {
            max_width_px: DEFAULT_PREVIEW_MAX_WIDTH_PX,
            max_height_px: DEFAULT_PREVIEW_MAX_HEIGHT_PX,
        }
    }
}

/// Scale factor and pixel dimensions for drawing the sheet on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewLayout {
    pub scale: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl PreviewLayout {
    pub const EMPTY: Self = Self {
        scale: 0.0,
        width_px: 0.0,
        height_px: 0.0,
    };
}

/// Fits the sheet into the preview box, preserving proportions.
#[must_use]
pub fn preview_layout(paper: Dimensions, tuning: &PreviewTuning) -> PreviewLayout {
    if !paper.is_positive() {
        return PreviewLayout::EMPTY;
    }
    let scale = (tuning.max_width_px / paper.width).min(tuning.max_height_px / paper.height);
    PreviewLayout {
        scale,
        width_px: paper.width * scale,
        height_px: paper.height * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wide_sheets_are_width_limited() {
        let layout = preview_layout(Dimensions::new(20.0, 10.0), &PreviewTuning::default());
        assert_relative_eq!(layout.scale, 20.0);
        assert_relative_eq!(layout.width_px, 400.0);
        assert_relative_eq!(layout.height_px, 200.0);
    }

    #[test]
    fn tall_sheets_are_height_limited() {
        let layout = preview_layout(Dimensions::new(8.0, 10.0), &PreviewTuning::default());
        assert_relative_eq!(layout.scale, 40.0);
        assert_relative_eq!(layout.width_px, 320.0);
        assert_relative_eq!(layout.height_px, 400.0);
    }

    #[test]
    fn degenerate_sheets_collapse_to_an_empty_layout() {
        assert_eq!(
            preview_layout(Dimensions::new(0.0, 10.0), &PreviewTuning::default()),
            PreviewLayout::EMPTY
        );
        assert_eq!(
            preview_layout(Dimensions::new(f64::NAN, 10.0), &PreviewTuning::default()),
            PreviewLayout::EMPTY
        );
    }
}
