//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::inbound::http::state::HttpState;
use crate::outbound::InMemoryEntityStore;

/// State backed by a fresh in-memory store.
///
/// Tests replace individual ports with mocks where they need to isolate the
/// HTTP mapping.
pub fn http_state() -> HttpState {
    HttpState::from_store(Arc::new(InMemoryEntityStore::new()))
}
