//! Domain Services
//!
//! Stateless conversion and reply logic over the static tables.

mod dispatch;
mod linear;
mod responder;
mod temperature;

pub use dispatch::*;
pub use linear::*;
pub use responder::*;
pub use temperature::*;
