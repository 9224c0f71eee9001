use crate::core::presets::{AspectRatioSelector, PaperSizeSelector};
use crate::core::types::Dimensions;

/// Paper and ratio pairs after preset lookup and orientation flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedDimensions {
    pub paper: Dimensions,
    pub ratio: Dimensions,
}

/// Resolves the sheet dimensions for the current selection.
///
/// Presets carry a portrait base; the landscape flag exchanges the pair.
/// Custom dimensions pass through untouched apart from the same exchange,
/// including degenerate values, which downstream stages must absorb.
#[must_use]
pub fn resolve_paper(
    selector: PaperSizeSelector,
    custom: Dimensions,
    is_landscape: bool,
) -> Dimensions {
    let base = selector.base_dimensions().unwrap_or(custom);
    if is_landscape { base.swapped() } else { base }
}

/// Resolves the ratio pair for the current selection.
///
/// `EvenBorders` adopts the oriented paper's own proportions so the print
/// becomes a uniform reduction of the sheet; the flip flag never applies to
/// it, since a flipped adoption would stop tracking the sheet.
#[must_use]
pub fn resolve_ratio(
    selector: AspectRatioSelector,
    custom: Dimensions,
    oriented_paper: Dimensions,
    is_ratio_flipped: bool,
) -> Dimensions {
    if selector.is_even_borders() {
        return oriented_paper;
    }
    let base = selector.base_ratio().unwrap_or(custom);
    if is_ratio_flipped { base.swapped() } else { base }
}

#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn resolve_oriented_dimensions(
    paper_selector: PaperSizeSelector,
    custom_paper: Dimensions,
    is_landscape: bool,
    ratio_selector: AspectRatioSelector,
    custom_ratio: Dimensions,
    is_ratio_flipped: bool,
) -> OrientedDimensions {
    let paper = resolve_paper(paper_selector, custom_paper, is_landscape);
    let ratio = resolve_ratio(ratio_selector, custom_ratio, paper, is_ratio_flipped);
    OrientedDimensions { paper, ratio }
}
