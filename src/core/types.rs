use serde::{Deserialize, Serialize};

/// Physical width/height pair in inches.
///
/// Used for paper sizes, aspect-ratio pairs, and easel slot openings alike;
/// the ratio variant carries unitless proportions in the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the same pair with width and height exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn shorter_side(self) -> f64 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.width >= self.height
    }

    /// True when `other` fits inside `self` without rotation.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}
