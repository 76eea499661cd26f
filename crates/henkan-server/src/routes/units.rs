//! Unit listing routes

use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};

use super::parse_domain;
use crate::models::UnitsResponse;
use crate::AppState;

/// List units of every domain
#[utoipa::path(
    get,
    path = "/henkan/units",
    responses(
        (status = 200, description = "Units per domain", body = Vec<UnitsResponse>)
    ),
    tag = "Units"
)]
pub async fn list_all_units() -> Json<Vec<UnitsResponse>> {
    Json(
        henkan::Domain::ALL
            .into_iter()
            .map(UnitsResponse::for_domain)
            .collect(),
    )
}

/// List units of one domain in display order
#[utoipa::path(
    get,
    path = "/henkan/units/{domain}",
    params(("domain" = String, Path, description = "length, weight or temperature")),
    responses(
        (status = 200, description = "Units of the domain", body = UnitsResponse),
        (status = 400, description = "Unknown domain")
    ),
    tag = "Units"
)]
pub async fn list_domain_units(
    Path(domain): Path<String>,
) -> Result<Json<UnitsResponse>, (axum::http::StatusCode, String)> {
    let domain = parse_domain(&domain)?;
    Ok(Json(UnitsResponse::for_domain(domain)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/henkan/units", get(list_all_units))
        .route("/henkan/units/:domain", get(list_domain_units))
}
