//! Chat Application Service (Use Case)

use std::sync::Arc;

use henkan::Responder;

/// Application service for the conversion assistant
pub struct ChatService<R: Responder> {
    responder: Arc<R>,
}

impl<R: Responder> ChatService<R> {
    pub fn new(responder: Arc<R>) -> Self {
        Self { responder }
    }

    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }

    /// Answer a single query
    pub fn reply(&self, query: &str) -> String {
        let reply = self.responder.respond(query);
        tracing::info!(
            "Chat reply from {} ({} chars in, {} chars out)",
            self.responder.name(),
            query.len(),
            reply.len()
        );
        reply
    }
}
