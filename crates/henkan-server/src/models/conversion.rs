//! Conversion request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Measurement domain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Length,
    Weight,
    Temperature,
}

impl From<henkan::Domain> for Domain {
    fn from(domain: henkan::Domain) -> Self {
        match domain {
            henkan::Domain::Length => Domain::Length,
            henkan::Domain::Weight => Domain::Weight,
            henkan::Domain::Temperature => Domain::Temperature,
        }
    }
}

/// Convert request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ConvertRequest {
    /// Value to convert; zero and negative values are accepted
    pub value: f64,
    /// Source unit (case-sensitive, e.g. "kilometers")
    pub from_unit: String,
    /// Target unit (case-sensitive, e.g. "miles")
    pub to_unit: String,
}

impl From<ConvertRequest> for henkan::ConversionRequest {
    fn from(req: ConvertRequest) -> Self {
        henkan::ConversionRequest::new(req.value, req.from_unit, req.to_unit)
    }
}

/// Convert response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub domain: Domain,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Unrounded result
    pub result: f64,
    /// Result line rounded to the configured precision
    pub display: String,
}

impl ConvertResponse {
    pub fn new(conversion: henkan::Conversion, display: String) -> Self {
        Self {
            domain: conversion.domain.into(),
            value: conversion.value,
            from_unit: conversion.from_unit,
            to_unit: conversion.to_unit,
            result: conversion.result,
            display,
        }
    }
}
