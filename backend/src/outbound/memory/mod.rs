//! In-memory entity store.
//!
//! All three collections sit behind one `std::sync::Mutex`, so every
//! `read`/`write` closure observes and produces a consistent snapshot. The
//! critical sections never await, which keeps a blocking mutex safe inside
//! async handlers.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::domain::Collections;
use crate::domain::ports::{EntityStore, EntityStoreError};

/// Process-local store shared by every manager through an `Arc`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use course_enrollment::domain::UserRegistry;
/// use course_enrollment::outbound::InMemoryEntityStore;
///
/// let store = Arc::new(InMemoryEntityStore::new());
/// let _registry = UserRegistry::new(Arc::clone(&store));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    collections: Mutex<Collections>,
}

impl InMemoryEntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, EntityStoreError> {
        self.collections.lock().map_err(|err| {
            warn!(error = %err, "entity store mutex poisoned");
            EntityStoreError::poisoned(err.to_string())
        })
    }
}

impl EntityStore for InMemoryEntityStore {
    fn read<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&Collections) -> Result<T, E>,
        E: From<EntityStoreError>,
    {
        let guard = self.lock()?;
        operation(&guard)
    }

    fn write<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Collections) -> Result<T, E>,
        E: From<EntityStoreError>,
    {
        let mut guard = self.lock()?;
        operation(&mut guard)
    }
}
