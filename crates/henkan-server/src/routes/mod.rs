//! Henkan API Routes
//!
//! - /henkan/convert - Conversion (domain detected or explicit)
//! - /henkan/units - Unit listings
//! - /henkan/chat - Conversion assistant

pub mod chat;
pub mod convert;
pub mod swagger;
pub mod units;

use axum::http::StatusCode;
use henkan::DomainError;

/// Conversion errors are caller mistakes
pub(crate) fn domain_error(e: DomainError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

/// Parse a `{domain}` path segment
pub(crate) fn parse_domain(raw: &str) -> Result<henkan::Domain, (StatusCode, String)> {
    raw.parse().map_err(|e: String| (StatusCode::BAD_REQUEST, e))
}
