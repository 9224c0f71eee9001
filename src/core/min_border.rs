use crate::core::types::Dimensions;

/// Default minimum border in inches, applied on every side of the print.
pub const DEFAULT_MIN_BORDER_IN: f64 = 0.5;

/// Outcome of checking a requested minimum border against the sheet.
///
/// `min_border` is the value the rest of the pipeline must use; `last_valid`
/// is the updated revert value for the next edit.
#[derive(Debug, Clone, PartialEq)]
pub struct MinBorderValidation {
    pub min_border: f64,
    pub last_valid: f64,
    pub warning: Option<String>,
}

impl MinBorderValidation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.warning.is_none()
    }
}

/// A border is usable when it is finite, not negative, and leaves a printable
/// area on the sheet's short side.
#[must_use]
pub fn is_usable_min_border(requested: f64, paper: Dimensions) -> bool {
    requested.is_finite() && requested >= 0.0 && requested < paper.shorter_side() / 2.0
}

/// Validates the requested minimum border, reverting to the last accepted
/// value when the request is out of range for the current sheet.
#[must_use]
pub fn validate_min_border(
    requested: f64,
    paper: Dimensions,
    last_valid: f64,
) -> MinBorderValidation {
    if is_usable_min_border(requested, paper) {
        return MinBorderValidation {
            min_border: requested,
            last_valid: requested,
            warning: None,
        };
    }
    let limit = paper.shorter_side() / 2.0;
    MinBorderValidation {
        min_border: last_valid,
        last_valid,
        warning: Some(format!(
            "minimum border must be at least 0 and under {limit:.2} in for this paper; keeping {last_valid:.2} in"
        )),
    }
}
