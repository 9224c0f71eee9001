//! Pure geometry for darkroom print borders.
//!
//! Every function in here is a value-in, value-out computation with no
//! shared state; the api layer composes them into the calculation pipeline
//! and owns caching, debouncing, and persistence.

pub mod blades;
pub mod easel;
pub mod exposure;
pub mod min_border;
pub mod offsets;
pub mod orientation;
pub mod presets;
pub mod preview;
pub mod primitives;
pub mod print_fit;
pub mod types;

pub use blades::{
    BladeReadingTuning, BladeReadings, Borders, DEFAULT_BLADE_THICKNESS_IN,
    DEFAULT_MIN_MARKED_READING_IN, compute_blade_readings, compute_borders,
};
pub use easel::{EaselFit, resolve_easel_fit};
pub use exposure::{CameraExposure, ResizeCompensation, adjust_exposure, resize_exposure};
pub use min_border::{
    DEFAULT_MIN_BORDER_IN, MinBorderValidation, is_usable_min_border, validate_min_border,
};
pub use offsets::{OffsetPlacement, apply_offsets};
pub use orientation::{
    OrientedDimensions, resolve_oriented_dimensions, resolve_paper, resolve_ratio,
};
pub use presets::{AspectRatioSelector, EASEL_SLOTS, EaselSlot, PaperSizeSelector};
pub use preview::{PreviewLayout, PreviewTuning, preview_layout};
pub use primitives::{decimal_to_f64, parse_dimension_field, parse_measurement_field};
pub use print_fit::{PrintGeometry, fit_print};
pub use types::Dimensions;
