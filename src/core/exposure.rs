use serde::{Deserialize, Serialize};

use crate::core::types::Dimensions;
use crate::error::{EaselError, EaselResult};

fn require_positive(value: f64, field_name: &str) -> EaselResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EaselError::InvalidInput(format!(
            "{field_name} must be a positive number, got {value}"
        )))
    }
}

/// Scales an exposure time by whole or fractional stops.
pub fn adjust_exposure(base_seconds: f64, stops: f64) -> EaselResult<f64> {
    let base = require_positive(base_seconds, "base exposure")?;
    if !stops.is_finite() {
        return Err(EaselError::InvalidInput(format!(
            "stop adjustment must be finite, got {stops}"
        )));
    }
    Ok(base * stops.exp2())
}

/// New exposure when the same negative is printed at a different size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeCompensation {
    pub seconds: f64,
    pub stops: f64,
}

/// Exposure compensation for enlarging or reducing a print.
///
/// Illumination falls with the projected area, so the new time scales by the
/// area ratio of the two prints.
pub fn resize_exposure(
    original: Dimensions,
    target: Dimensions,
    base_seconds: f64,
) -> EaselResult<ResizeCompensation> {
    require_positive(original.width, "original width")?;
    require_positive(original.height, "original height")?;
    require_positive(target.width, "target width")?;
    require_positive(target.height, "target height")?;
    let base = require_positive(base_seconds, "base exposure")?;

    let ratio = target.area() / original.area();
    Ok(ResizeCompensation {
        seconds: base * ratio,
        stops: ratio.log2(),
    })
}

/// A camera exposure triple used for equivalence calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraExposure {
    pub aperture: f64,
    pub shutter_seconds: f64,
    pub iso: f64,
}

impl CameraExposure {
    pub fn new(aperture: f64, shutter_seconds: f64, iso: f64) -> EaselResult<Self> {
        Ok(Self {
            aperture: require_positive(aperture, "aperture")?,
            shutter_seconds: require_positive(shutter_seconds, "shutter time")?,
            iso: require_positive(iso, "iso")?,
        })
    }

    /// Exposure value normalized to ISO 100.
    #[must_use]
    pub fn ev100(&self) -> f64 {
        (self.aperture * self.aperture / self.shutter_seconds).log2() - (self.iso / 100.0).log2()
    }

    /// Equivalent exposure at a different aperture, compensating with the
    /// shutter.
    pub fn with_aperture(&self, aperture: f64) -> EaselResult<Self> {
        let aperture = require_positive(aperture, "aperture")?;
        let factor = (aperture / self.aperture).powi(2);
        Ok(Self {
            aperture,
            shutter_seconds: self.shutter_seconds * factor,
            iso: self.iso,
        })
    }

    /// Equivalent exposure at a different film speed, compensating with the
    /// shutter.
    pub fn with_iso(&self, iso: f64) -> EaselResult<Self> {
        let iso = require_positive(iso, "iso")?;
        Ok(Self {
            aperture: self.aperture,
            shutter_seconds: self.shutter_seconds * self.iso / iso,
            iso,
        })
    }

    /// Equivalent exposure at a different shutter time, compensating with
    /// the aperture.
    pub fn with_shutter(&self, shutter_seconds: f64) -> EaselResult<Self> {
        let shutter_seconds = require_positive(shutter_seconds, "shutter time")?;
        Ok(Self {
            aperture: self.aperture * (shutter_seconds / self.shutter_seconds).sqrt(),
            shutter_seconds,
            iso: self.iso,
        })
    }
}
