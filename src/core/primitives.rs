use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

use crate::error::{EaselError, EaselResult};

/// Converts a decimal field into a finite f64, reporting the field name on failure.
pub fn decimal_to_f64(value: Decimal, field_name: &str) -> EaselResult<f64> {
    let converted = value
        .to_f64()
        .ok_or_else(|| EaselError::InvalidInput(format!("{field_name} is not representable")))?;
    if !converted.is_finite() {
        return Err(EaselError::InvalidInput(format!(
            "{field_name} must be finite, got {converted}"
        )));
    }
    Ok(converted)
}

/// Parses a free-text measurement field as typed in a dimension input box.
///
/// Accepts plain decimal notation ("8", "8.5", ".25"). Whitespace is trimmed;
/// everything else is rejected with the field name in the error.
pub fn parse_measurement_field(input: &str, field_name: &str) -> EaselResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EaselError::InvalidInput(format!("{field_name} is empty")));
    }
    let decimal = Decimal::from_str(trimmed).map_err(|err| {
        EaselError::InvalidInput(format!("{field_name} is not a number: {err}"))
    })?;
    decimal_to_f64(decimal, field_name)
}

/// Parses a dimension field that must be strictly positive (paper and ratio sizes).
pub fn parse_dimension_field(input: &str, field_name: &str) -> EaselResult<f64> {
    let value = parse_measurement_field(input, field_name)?;
    if value <= 0.0 {
        return Err(EaselError::InvalidInput(format!(
            "{field_name} must be greater than zero, got {value}"
        )));
    }
    Ok(value)
}
