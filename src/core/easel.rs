use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::presets::EASEL_SLOTS;
use crate::core::types::Dimensions;

/// Tolerance for treating a sheet as an exact slot match.
const SLOT_MATCH_EPS: f64 = 1e-9;

/// Easel slot selected for the current sheet.
///
/// `effective_slot` is the slot opening oriented to match the sheet. For a
/// non-standard sheet the readings must be corrected by the centering shift,
/// because the sheet is registered against the slot corner rather than
/// filling the opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaselFit {
    pub easel_size: Dimensions,
    pub effective_slot: Dimensions,
    pub is_non_standard_paper_size: bool,
}

impl EaselFit {
    /// Displacement of the sheet center from the slot center, positive right
    /// and down. Zero for an exact match.
    #[must_use]
    pub fn centering_shift(&self, paper: Dimensions) -> (f64, f64) {
        if !self.is_non_standard_paper_size {
            return (0.0, 0.0);
        }
        (
            (paper.width - self.effective_slot.width) / 2.0,
            (paper.height - self.effective_slot.height) / 2.0,
        )
    }
}

/// Picks the easel slot for a sheet: an exact match in either orientation if
/// one exists, otherwise the smallest slot the sheet fits into, otherwise
/// the sheet itself (oversized paper lies on top of the largest easel).
#[must_use]
pub fn resolve_easel_fit(paper: Dimensions) -> EaselFit {
    for slot in &EASEL_SLOTS {
        for oriented in [slot.size, slot.size.swapped()] {
            if (paper.width - oriented.width).abs() < SLOT_MATCH_EPS
                && (paper.height - oriented.height).abs() < SLOT_MATCH_EPS
            {
                return EaselFit {
                    easel_size: slot.size,
                    effective_slot: oriented,
                    is_non_standard_paper_size: false,
                };
            }
        }
    }

    let smallest_fit = EASEL_SLOTS
        .iter()
        .filter_map(|slot| {
            let oriented = orient_to(slot.size, paper);
            oriented.contains(paper).then_some((slot, oriented))
        })
        .min_by_key(|(slot, _)| OrderedFloat(slot.size.area()));

    match smallest_fit {
        Some((slot, oriented)) => EaselFit {
            easel_size: slot.size,
            effective_slot: oriented,
            is_non_standard_paper_size: true,
        },
        None => EaselFit {
            easel_size: paper,
            effective_slot: paper,
            is_non_standard_paper_size: true,
        },
    }
}

/// Orients a slot to agree with the sheet: landscape sheets get the slot's
/// long edge horizontal.
fn orient_to(slot: Dimensions, paper: Dimensions) -> Dimensions {
    if paper.is_landscape() == slot.is_landscape() {
        slot
    } else {
        slot.swapped()
    }
}
