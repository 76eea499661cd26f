//! Unit listing DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Domain;

/// Units of one domain in display order
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UnitsResponse {
    pub domain: Domain,
    /// Unit every scale factor is relative to (absent for temperature)
    pub base_unit: Option<String>,
    pub units: Vec<String>,
}

impl UnitsResponse {
    pub fn for_domain(domain: henkan::Domain) -> Self {
        Self {
            domain: domain.into(),
            base_unit: henkan::base_unit(domain).map(str::to_string),
            units: henkan::units(domain).into_iter().map(str::to_string).collect(),
        }
    }
}
