//! Convert Routes
//!
//! HTTP handlers that delegate to ConversionService.

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use super::{domain_error, parse_domain};
use crate::models::{ConvertRequest, ConvertResponse};
use crate::AppState;

/// Convert within an explicit domain
#[utoipa::path(
    post,
    path = "/henkan/convert/{domain}",
    params(("domain" = String, Path, description = "length, weight or temperature")),
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion result", body = ConvertResponse),
        (status = 400, description = "Unknown domain or unit"),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Convert"
)]
pub async fn convert_in_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, (axum::http::StatusCode, String)> {
    let domain = parse_domain(&domain)?;
    let service = &state.conversion_service;

    let conversion = service
        .convert(domain, payload.into())
        .map_err(domain_error)?;
    let display = service.render(&conversion);

    Ok(Json(ConvertResponse::new(conversion, display)))
}

/// Convert, detecting the domain from the unit names
#[utoipa::path(
    post,
    path = "/henkan/convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion result", body = ConvertResponse),
        (status = 400, description = "Unknown unit or units from different domains"),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Convert"
)]
pub async fn convert_detected(
    State(state): State<AppState>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, (axum::http::StatusCode, String)> {
    let service = &state.conversion_service;

    let conversion = service
        .convert_auto(payload.into())
        .map_err(domain_error)?;
    let display = service.render(&conversion);

    Ok(Json(ConvertResponse::new(conversion, display)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/henkan/convert", post(convert_detected))
        .route("/henkan/convert/:domain", post(convert_in_domain))
}
