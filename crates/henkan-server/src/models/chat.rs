//! Assistant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    pub query: String,
}

/// Chat response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
}
