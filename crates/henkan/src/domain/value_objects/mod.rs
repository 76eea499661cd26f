//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod domain;
mod temperature_scale;

pub use domain::*;
pub use temperature_scale::*;
