//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: process-local [`EntityStore`](crate::domain::ports::EntityStore)
//!   guarded by a single mutex.
//!
//! Adapters translate between domain types and infrastructure. They hold no
//! business rules.

pub mod memory;

pub use memory::InMemoryEntityStore;
