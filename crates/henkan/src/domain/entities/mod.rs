//! Domain Entities
//!
//! Static conversion tables, chatbot rules and conversion records.

mod chatbot_rule;
mod conversion;
mod unit_table;

pub use chatbot_rule::*;
pub use conversion::*;
pub use unit_table::*;
