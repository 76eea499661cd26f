//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations for the HTTP handlers.

mod chat_service;
mod conversion_service;

pub use chat_service::ChatService;
pub use conversion_service::ConversionService;
