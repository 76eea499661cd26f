//! Domain Errors
//!
//! Error types for conversion operations.

use thiserror::Error;

use crate::domain::value_objects::Domain;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Unit name is not part of the requested domain. `domain` is `None`
    /// when no domain was given and none could be detected.
    #[error("Unknown unit: '{unit}'{}", domain_suffix(.domain))]
    UnknownUnit {
        domain: Option<Domain>,
        unit: String,
    },

    #[error("Invalid domain combination: cannot convert {from} to {to}")]
    InvalidDomainCombination { from: Domain, to: Domain },
}

fn domain_suffix(domain: &Option<Domain>) -> String {
    domain.map(|d| format!(" for {d}")).unwrap_or_default()
}

impl DomainError {
    pub fn unknown_unit<T: AsRef<str>>(domain: Domain, unit: T) -> Self {
        Self::UnknownUnit {
            domain: Some(domain),
            unit: unit.as_ref().to_string(),
        }
    }

    pub fn unresolved_unit<T: AsRef<str>>(unit: T) -> Self {
        Self::UnknownUnit {
            domain: None,
            unit: unit.as_ref().to_string(),
        }
    }
}
