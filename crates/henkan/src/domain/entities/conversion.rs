//! Conversion - Request and result records

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Domain;

/// Decimal places used when rendering a result for display
pub const DEFAULT_PRECISION: usize = 4;

/// Largest number of decimals a result is rendered with
pub const MAX_PRECISION: usize = 12;

/// A value to convert between two units of one domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// A completed conversion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversion {
    pub domain: Domain,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl Conversion {
    /// Render as `"{value} {from} = {result} {to}"` with a fixed number of
    /// decimals on the result, capped at [`MAX_PRECISION`]
    pub fn display(&self, precision: usize) -> String {
        format!(
            "{} {} = {:.*} {}",
            self.value,
            self.from_unit,
            precision.min(MAX_PRECISION),
            self.result,
            self.to_unit
        )
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display(DEFAULT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fixed_precision() {
        let conversion = Conversion {
            domain: Domain::Weight,
            value: 1.0,
            from_unit: "kilograms".to_string(),
            to_unit: "pounds".to_string(),
            result: 2.20462,
        };
        assert_eq!(conversion.to_string(), "1 kilograms = 2.2046 pounds");
        assert_eq!(conversion.display(1), "1 kilograms = 2.2 pounds");
    }

    #[test]
    fn test_display_caps_precision() {
        let conversion = Conversion {
            domain: Domain::Length,
            value: 1.0,
            from_unit: "kilometers".to_string(),
            to_unit: "meters".to_string(),
            result: 1000.0,
        };
        assert_eq!(
            conversion.display(70_000),
            conversion.display(MAX_PRECISION)
        );
        assert_eq!(conversion.display(70_000), "1 kilometers = 1000.000000000000 meters");
    }

    #[test]
    fn test_request_from_json() {
        let req: ConversionRequest = serde_json::from_str(
            r#"{"value": -4.5, "from_unit": "light years", "to_unit": "meters"}"#,
        )
        .unwrap();
        assert_eq!(req, ConversionRequest::new(-4.5, "light years", "meters"));
    }
}
