//! Henkan API Models
//!
//! - Conversion: convert requests and results
//! - Units: unit listings per domain
//! - Chat: assistant queries and replies

mod chat;
mod conversion;
mod units;

pub use chat::*;
pub use conversion::*;
pub use units::*;
