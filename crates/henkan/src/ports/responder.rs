//! Responder Port
//!
//! Abstract interface for the conversion assistant.

/// Produces a reply for a free-text user query.
///
/// Implementations must be stateless across calls: each query is answered
/// on its own, without session memory.
pub trait Responder: Send + Sync {
    /// Reply to a single query
    fn respond(&self, query: &str) -> String;

    /// Short identifier for logs
    fn name(&self) -> &str {
        "responder"
    }
}
