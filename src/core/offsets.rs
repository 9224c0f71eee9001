use crate::core::print_fit::PrintGeometry;
use crate::core::types::Dimensions;

/// Print placement after offsets are applied and clamped.
///
/// `half_width_gap`/`half_height_gap` are the per-side gaps of a centered
/// print; the applied offsets shift the print right (positive horizontal)
/// and down (positive vertical) from that centered position.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPlacement {
    pub half_width_gap: f64,
    pub half_height_gap: f64,
    pub horizontal: f64,
    pub vertical: f64,
    pub warning: Option<String>,
}

/// Clamps the requested print offsets to the travel the sheet allows.
///
/// With `ignore_min_border` the print may ride up to the sheet edge; without
/// it the reserved minimum border is kept on every side. A request outside
/// that travel is pulled back and flagged, never rejected.
#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn apply_offsets(
    paper: Dimensions,
    print: PrintGeometry,
    min_border: f64,
    requested_horizontal: f64,
    requested_vertical: f64,
    enable_offset: bool,
    ignore_min_border: bool,
) -> OffsetPlacement {
    let half_width_gap = (paper.width - print.width) / 2.0;
    let half_height_gap = (paper.height - print.height) / 2.0;
    if !enable_offset {
        return OffsetPlacement {
            half_width_gap,
            half_height_gap,
            horizontal: 0.0,
            vertical: 0.0,
            warning: None,
        };
    }

    let slack = if ignore_min_border { 0.0 } else { min_border };
    let (horizontal, clamped_h) = clamp_to_travel(requested_horizontal, half_width_gap - slack);
    let (vertical, clamped_v) = clamp_to_travel(requested_vertical, half_height_gap - slack);

    let warning = (clamped_h || clamped_v).then(|| {
        format!(
            "offset clamped to ({horizontal:+.2}, {vertical:+.2}) in to keep the print on the sheet"
        )
    });

    OffsetPlacement {
        half_width_gap,
        half_height_gap,
        horizontal,
        vertical,
        warning,
    }
}

fn clamp_to_travel(requested: f64, travel: f64) -> (f64, bool) {
    if !requested.is_finite() {
        return (0.0, true);
    }
    let travel = travel.max(0.0);
    let applied = requested.clamp(-travel, travel);
    (applied, applied != requested)
}
