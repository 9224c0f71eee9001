use serde::{Deserialize, Serialize};

use crate::core::offsets::OffsetPlacement;
use crate::core::print_fit::PrintGeometry;

/// Physical blade bar width of a typical four-blade easel, in inches.
pub const DEFAULT_BLADE_THICKNESS_IN: f64 = 15.0 / 32.0;

/// Shortest reading most easel scales still mark.
pub const DEFAULT_MIN_MARKED_READING_IN: f64 = 3.0;

/// Overridable constants for the blade reading checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BladeReadingTuning {
    pub blade_thickness_in: f64,
    pub min_marked_reading_in: f64,
}

impl Default for BladeReadingTuning {
    fn default() -> Self {
        Self {
            blade_thickness_in: DEFAULT_BLADE_THICKNESS_IN,
            min_marked_reading_in: DEFAULT_MIN_MARKED_READING_IN,
        }
    }
}

/// White border width on each side of the placed print, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Borders {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn smallest(self) -> f64 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}

/// Borders left around the print after the applied offsets.
#[must_use]
pub fn compute_borders(placement: &OffsetPlacement) -> Borders {
    Borders {
        left: placement.half_width_gap + placement.horizontal,
        right: placement.half_width_gap - placement.horizontal,
        top: placement.half_height_gap + placement.vertical,
        bottom: placement.half_height_gap - placement.vertical,
    }
}

/// Scale readings for the four easel blades.
///
/// Easel scales assume a symmetric opening, so each blade reads twice its
/// distance from the slot center. A centered print reads the print dimension
/// on all four blades; shifts split the readings in opposing pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BladeReadings {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub blade_thickness: f64,
    pub warning: Option<String>,
}

/// Computes the four blade readings for a print whose center sits at
/// `(shift_x, shift_y)` relative to the easel slot center, positive right
/// and down.
#[must_use]
pub fn compute_blade_readings(
    print: PrintGeometry,
    shift_x: f64,
    shift_y: f64,
    tuning: &BladeReadingTuning,
) -> BladeReadings {
    let left = print.width - 2.0 * shift_x;
    let right = print.width + 2.0 * shift_x;
    let top = print.height - 2.0 * shift_y;
    let bottom = print.height + 2.0 * shift_y;

    let readings = [left, right, top, bottom];
    let mut notes: Vec<String> = Vec::new();
    if readings.iter().any(|reading| *reading < 0.0) {
        notes.push(
            "negative blade reading; set the blade from the opposite side of its scale".into(),
        );
    }
    if readings
        .iter()
        .any(|reading| *reading != 0.0 && reading.abs() < tuning.min_marked_reading_in)
    {
        notes.push(format!(
            "blade readings under {:.1} in may fall outside the marked scale on some easels",
            tuning.min_marked_reading_in
        ));
    }

    BladeReadings {
        left,
        right,
        top,
        bottom,
        blade_thickness: tuning.blade_thickness_in,
        warning: (!notes.is_empty()).then(|| notes.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::offsets::apply_offsets;
    use crate::core::types::Dimensions;
    use approx::assert_relative_eq;

    #[test]
    fn centered_print_reads_its_own_dimensions() {
        let readings = compute_blade_readings(
            PrintGeometry::new(9.0, 6.0),
            0.0,
            0.0,
            &BladeReadingTuning::default(),
        );
        assert_relative_eq!(readings.left, 9.0);
        assert_relative_eq!(readings.right, 9.0);
        assert_relative_eq!(readings.top, 6.0);
        assert_relative_eq!(readings.bottom, 6.0);
        assert!(readings.warning.is_none());
    }

    #[test]
    fn shifts_split_opposing_readings() {
        let readings = compute_blade_readings(
            PrintGeometry::new(9.0, 6.0),
            0.25,
            -0.5,
            &BladeReadingTuning::default(),
        );
        assert_relative_eq!(readings.left, 8.5);
        assert_relative_eq!(readings.right, 9.5);
        assert_relative_eq!(readings.top, 7.0);
        assert_relative_eq!(readings.bottom, 5.0);
    }

    #[test]
    fn negative_readings_are_flagged() {
        let readings = compute_blade_readings(
            PrintGeometry::new(2.0, 2.0),
            1.5,
            0.0,
            &BladeReadingTuning::default(),
        );
        assert!(readings.left < 0.0);
        let warning = readings.warning.unwrap();
        assert!(warning.contains("opposite side"));
    }

    #[test]
    fn small_readings_are_flagged_but_zero_is_quiet() {
        let readings = compute_blade_readings(
            PrintGeometry::new(2.5, 4.0),
            0.0,
            0.0,
            &BladeReadingTuning::default(),
        );
        assert!(readings.warning.unwrap().contains("marked scale"));

        let silent = compute_blade_readings(
            PrintGeometry::ZERO,
            0.0,
            0.0,
            &BladeReadingTuning::default(),
        );
        assert!(silent.warning.is_none());
    }

    #[test]
    fn borders_track_the_applied_offsets() {
        let placement = apply_offsets(
            Dimensions::new(10.0, 8.0),
            PrintGeometry::new(8.0, 6.0),
            0.5,
            0.25,
            -0.25,
            true,
            false,
        );
        let borders = compute_borders(&placement);
        assert_relative_eq!(borders.left, 1.25);
        assert_relative_eq!(borders.right, 0.75);
        assert_relative_eq!(borders.top, 0.75);
        assert_relative_eq!(borders.bottom, 1.25);
        assert!(borders.smallest() >= 0.5);
    }
}
