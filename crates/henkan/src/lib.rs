//! Henkan Domain Library
//!
//! Core conversion logic and the keyword assistant for the Henkan
//! unit converter.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure conversion logic
//!   - `entities/`: Unit tables, chatbot rules, conversion records
//!   - `value_objects/`: Immutable value types (Domain, TemperatureScale)
//!   - `services/`: Linear, temperature and keyword-responder logic
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `responder`: Chat reply interface
//!
//! # Usage
//!
//! ```rust
//! use henkan::{chatbot_reply, convert_length, convert_temperature};
//!
//! assert_eq!(convert_length(1.0, "kilometers", "meters").unwrap(), 1000.0);
//! assert_eq!(convert_temperature(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
//! assert_eq!(
//!     chatbot_reply("Hello there"),
//!     "Hi! How can I help you with unit conversion today?"
//! );
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    base_unit, chatbot_reply, convert, convert_auto, convert_length, convert_temperature,
    convert_weight, detect_domain, units, ChatbotRule, Conversion, ConversionRequest, Domain,
    DomainError, KeywordResponder, TemperatureScale, UnitTable, DEFAULT_PRECISION, DEFAULT_REPLY,
    DEFAULT_RULES, FAREWELL_RULE, LENGTH_TABLE, MAX_PRECISION, WEIGHT_TABLE,
};
pub use ports::Responder;
