use serde::{Deserialize, Serialize};

use crate::core::types::Dimensions;

/// Standard darkroom paper sizes plus a custom escape hatch.
///
/// Preset dimensions are stored portrait (short edge first); orientation is
/// applied later by the dimension resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSizeSelector {
    FourByFive,
    FiveBySeven,
    EightByTen,
    ElevenByFourteen,
    SixteenByTwenty,
    TwentyByTwentyFour,
    Custom,
}

impl PaperSizeSelector {
    pub const PRESETS: [Self; 6] = [
        Self::FourByFive,
        Self::FiveBySeven,
        Self::EightByTen,
        Self::ElevenByFourteen,
        Self::SixteenByTwenty,
        Self::TwentyByTwentyFour,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FourByFive => "4x5",
            Self::FiveBySeven => "5x7",
            Self::EightByTen => "8x10",
            Self::ElevenByFourteen => "11x14",
            Self::SixteenByTwenty => "16x20",
            Self::TwentyByTwentyFour => "20x24",
            Self::Custom => "custom",
        }
    }

    /// Portrait-base sheet dimensions in inches, or `None` for custom.
    #[must_use]
    pub const fn base_dimensions(self) -> Option<Dimensions> {
        match self {
            Self::FourByFive => Some(Dimensions::new(4.0, 5.0)),
            Self::FiveBySeven => Some(Dimensions::new(5.0, 7.0)),
            Self::EightByTen => Some(Dimensions::new(8.0, 10.0)),
            Self::ElevenByFourteen => Some(Dimensions::new(11.0, 14.0)),
            Self::SixteenByTwenty => Some(Dimensions::new(16.0, 20.0)),
            Self::TwentyByTwentyFour => Some(Dimensions::new(20.0, 24.0)),
            Self::Custom => None,
        }
    }

    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

/// Negative and print aspect ratios commonly composed for in the darkroom.
///
/// Preset pairs are stored landscape (long edge first); `EvenBorders` has no
/// fixed pair, it adopts the oriented paper's own proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatioSelector {
    ThirtyFiveMm,
    Xpan,
    Square,
    SixBySeven,
    FourByFive,
    EightByTen,
    FiveBySeven,
    SixteenByNine,
    Custom,
    EvenBorders,
}

impl AspectRatioSelector {
    pub const PRESETS: [Self; 8] = [
        Self::ThirtyFiveMm,
        Self::Xpan,
        Self::Square,
        Self::SixBySeven,
        Self::FourByFive,
        Self::EightByTen,
        Self::FiveBySeven,
        Self::SixteenByNine,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThirtyFiveMm => "3:2 (35mm)",
            Self::Xpan => "65:24 (XPan)",
            Self::Square => "1:1 (square)",
            Self::SixBySeven => "6x7",
            Self::FourByFive => "4x5",
            Self::EightByTen => "8x10",
            Self::FiveBySeven => "5x7",
            Self::SixteenByNine => "16:9",
            Self::Custom => "custom",
            Self::EvenBorders => "even borders",
        }
    }

    /// Landscape-base ratio pair, or `None` for the data-driven variants.
    #[must_use]
    pub const fn base_ratio(self) -> Option<Dimensions> {
        match self {
            Self::ThirtyFiveMm => Some(Dimensions::new(3.0, 2.0)),
            Self::Xpan => Some(Dimensions::new(65.0, 24.0)),
            Self::Square => Some(Dimensions::new(1.0, 1.0)),
            Self::SixBySeven => Some(Dimensions::new(7.0, 6.0)),
            Self::FourByFive => Some(Dimensions::new(5.0, 4.0)),
            Self::EightByTen => Some(Dimensions::new(10.0, 8.0)),
            Self::FiveBySeven => Some(Dimensions::new(7.0, 5.0)),
            Self::SixteenByNine => Some(Dimensions::new(16.0, 9.0)),
            Self::Custom | Self::EvenBorders => None,
        }
    }

    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    #[must_use]
    pub const fn is_even_borders(self) -> bool {
        matches!(self, Self::EvenBorders)
    }
}

/// A four-blade easel opening, named after the paper it is sized for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaselSlot {
    pub name: &'static str,
    pub size: Dimensions,
}

/// Slot openings of the common four-blade easels, smallest first.
pub const EASEL_SLOTS: [EaselSlot; 5] = [
    EaselSlot {
        name: "5x7",
        size: Dimensions::new(5.0, 7.0),
    },
    EaselSlot {
        name: "8x10",
        size: Dimensions::new(8.0, 10.0),
    },
    EaselSlot {
        name: "11x14",
        size: Dimensions::new(11.0, 14.0),
    },
    EaselSlot {
        name: "16x20",
        size: Dimensions::new(16.0, 20.0),
    },
    EaselSlot {
        name: "20x24",
        size: Dimensions::new(20.0, 24.0),
    },
];
