use serde::{Deserialize, Serialize};

use crate::core::types::Dimensions;

/// Print rectangle in inches, centered on the sheet before offsets apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintGeometry {
    pub width: f64,
    pub height: f64,
}

impl PrintGeometry {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when no printable rectangle exists for the current inputs.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Largest print of the requested proportions that fits inside the sheet
/// once the minimum border is reserved on every side.
///
/// Degenerate inputs (non-positive available area, unusable ratio) collapse
/// to a zero-size print instead of an error; hosts render that as "no valid
/// print" while the operator keeps typing.
#[must_use]
pub fn fit_print(paper: Dimensions, ratio: Dimensions, min_border: f64) -> PrintGeometry {
    let available_w = paper.width - 2.0 * min_border;
    let available_h = paper.height - 2.0 * min_border;
    if !available_w.is_finite() || !available_h.is_finite() {
        return PrintGeometry::ZERO;
    }
    if available_w <= 0.0 || available_h <= 0.0 || !ratio.is_positive() {
        return PrintGeometry::ZERO;
    }

    let target = ratio.width / ratio.height;
    if available_w / available_h > target {
        // Height binds; width follows the ratio.
        PrintGeometry::new(available_h * target, available_h)
    } else {
        PrintGeometry::new(available_w, available_w / target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn landscape_sheet_with_35mm_ratio_is_width_bound() {
        let print = fit_print(Dimensions::new(10.0, 8.0), Dimensions::new(3.0, 2.0), 0.5);
        assert_relative_eq!(print.width, 9.0);
        assert_relative_eq!(print.height, 6.0);
    }

    #[test]
    fn tall_ratio_is_height_bound() {
        let print = fit_print(Dimensions::new(10.0, 8.0), Dimensions::new(2.0, 3.0), 0.5);
        assert_relative_eq!(print.height, 7.0);
        assert_relative_eq!(print.width, 7.0 * 2.0 / 3.0);
    }

    #[test]
    fn matching_proportions_fill_the_available_area() {
        let print = fit_print(Dimensions::new(9.0, 7.0), Dimensions::new(9.0, 7.0), 1.0);
        assert_relative_eq!(print.width, 7.0);
        assert_relative_eq!(print.height, 5.0);
    }

    #[test]
    fn degenerate_inputs_collapse_to_zero() {
        let ratio = Dimensions::new(3.0, 2.0);
        assert!(fit_print(Dimensions::new(0.0, 10.0), ratio, 0.5).is_degenerate());
        assert!(fit_print(Dimensions::new(8.0, 10.0), ratio, 4.0).is_degenerate());
        assert!(fit_print(Dimensions::new(8.0, 10.0), ratio, 5.0).is_degenerate());
        let zero_ratio = fit_print(Dimensions::new(8.0, 10.0), Dimensions::new(0.0, 2.0), 0.5);
        assert!(zero_ratio.is_degenerate());
        let nan_ratio = fit_print(Dimensions::new(8.0, 10.0), Dimensions::new(f64::NAN, 2.0), 0.5);
        assert!(nan_ratio.is_degenerate());
        assert!(fit_print(Dimensions::new(f64::NAN, 10.0), ratio, 0.5).is_degenerate());
    }
}
