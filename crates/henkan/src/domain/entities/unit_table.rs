//! UnitTable - Scale factors for the linear domains
//!
//! Each factor is the number of that unit in one base unit, so a value
//! goes to the base unit by dividing and leaves it by multiplying.

use crate::domain::{errors::DomainError, value_objects::Domain};

/// Ordered unit table for a linear domain.
///
/// Entry order is display order. Exactly one entry carries factor `1.0`.
#[derive(Debug)]
pub struct UnitTable {
    pub domain: Domain,
    entries: &'static [(&'static str, f64)],
}

/// Length units relative to meters
pub static LENGTH_TABLE: UnitTable = UnitTable {
    domain: Domain::Length,
    entries: &[
        ("meters", 1.0),
        ("kilometers", 0.001),
        ("centimeters", 100.0),
        ("millimeters", 1000.0),
        ("miles", 0.000621371),
        ("yards", 1.09361),
        ("feet", 3.28084),
        ("inches", 39.3701),
        ("nanometers", 1e9),
        ("micrometers", 1e6),
        ("light years", 1.057e-16),
    ],
};

/// Weight units relative to kilograms
pub static WEIGHT_TABLE: UnitTable = UnitTable {
    domain: Domain::Weight,
    entries: &[
        ("kilograms", 1.0),
        ("grams", 1000.0),
        ("milligrams", 1_000_000.0),
        ("pounds", 2.20462),
        ("ounces", 35.274),
        ("metric tons", 0.001),
        ("stone", 0.157473),
        ("grains", 15432.4),
    ],
};

impl UnitTable {
    /// Scale factor for `unit` (case-sensitive)
    pub fn factor(&self, unit: &str) -> Result<f64, DomainError> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| DomainError::unknown_unit(self.domain, unit))
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == unit)
    }

    /// Unit names in display order
    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// The unit whose factor is exactly one, if the table has one
    pub fn base_unit(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, factor)| *factor == 1.0)
            .map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert `value` between two units of this table.
    ///
    /// Both units are validated first; identical units return `value`
    /// untouched.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DomainError> {
        let from = self.factor(from_unit)?;
        let to = self.factor(to_unit)?;

        if from_unit == to_unit {
            return Ok(value);
        }

        let value_in_base = value / from;
        Ok(value_in_base * to)
    }
}
