//! Linear conversions for length and weight

use crate::domain::{
    entities::{LENGTH_TABLE, WEIGHT_TABLE},
    errors::DomainError,
};

/// Convert a length between two of the units in [`LENGTH_TABLE`]
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    LENGTH_TABLE.convert(value, from_unit, to_unit)
}

/// Convert a weight between two of the units in [`WEIGHT_TABLE`]
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
    WEIGHT_TABLE.convert(value, from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;

    #[test]
    fn test_kilometers_to_meters() {
        assert_eq!(convert_length(1.0, "kilometers", "meters"), Ok(1000.0));
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let pounds = convert_weight(1.0, "kilograms", "pounds").unwrap();
        assert!((pounds - 2.20462).abs() < 1e-12);
    }

    #[test]
    fn test_feet_to_inches() {
        let inches = convert_length(1.0, "feet", "inches").unwrap();
        assert!((inches - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_unknown_target_unit() {
        assert_eq!(
            convert_length(5.0, "meters", "parsecs"),
            Err(DomainError::unknown_unit(Domain::Length, "parsecs"))
        );
    }

    #[test]
    fn test_unknown_source_unit() {
        assert_eq!(
            convert_weight(5.0, "tonnes", "grams"),
            Err(DomainError::unknown_unit(Domain::Weight, "tonnes"))
        );
    }

    #[test]
    fn test_cross_table_unit_is_unknown() {
        assert!(convert_weight(1.0, "meters", "grams").is_err());
    }
}
