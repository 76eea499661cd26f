//! Ports (Interfaces)
//!
//! Abstract interfaces that the HTTP and CLI surfaces depend on.
//!
//! Implementations live in the domain services or the outer crates.

mod responder;

// Re-exports
pub use responder::*;
