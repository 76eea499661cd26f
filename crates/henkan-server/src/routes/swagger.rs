//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ChatRequest, ChatResponse, ConvertRequest, ConvertResponse, Domain, UnitsResponse,
};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Convert endpoints
        super::convert::convert_in_domain,
        super::convert::convert_detected,
        // Unit endpoints
        super::units::list_all_units,
        super::units::list_domain_units,
        // Chat endpoints
        super::chat::chat,
    ),
    info(
        title = "Henkan API",
        version = "0.1.0",
        description = "変換 (Henkan) - Length, weight and temperature conversion \
                       with a keyword assistant",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Convert", description = "Convert - Unit conversion within a domain"),
        (name = "Units", description = "Units - Supported units per domain"),
        (name = "Chat", description = "Chat - Keyword conversion assistant"),
    ),
    components(
        schemas(
            HealthCheck,
            Domain,
            ConvertRequest,
            ConvertResponse,
            UnitsResponse,
            ChatRequest,
            ChatResponse,
        )
    ),
)]
pub struct ApiDoc;
