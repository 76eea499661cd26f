//! Affine temperature conversions

use crate::domain::{errors::DomainError, value_objects::TemperatureScale};

/// Convert a temperature between `celsius`, `fahrenheit` and `kelvin`.
///
/// Names outside the three scales fail with `UnknownUnit`.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    let from: TemperatureScale = from_unit.parse()?;
    let to: TemperatureScale = to_unit.parse()?;
    Ok(from.convert(value, to))
}
