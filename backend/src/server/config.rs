//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use course_enrollment::outbound::InMemoryEntityStore;

/// Resolved listener address and backing store for the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<InMemoryEntityStore>,
}

impl ServerConfig {
    /// Construct a server configuration with an empty store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: Arc::new(InMemoryEntityStore::new()),
        }
    }
}
