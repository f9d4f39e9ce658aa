//! Driven port guarding the shared [`Collections`].
//!
//! Every manager operation runs its checks and mutations inside one `read`
//! or `write` call, so a check and the mutation it guards cannot interleave
//! with another request.

use super::define_store_error;
use crate::domain::Collections;

define_store_error! {
    /// Failures raised by entity store adapters.
    pub enum EntityStoreError {
        /// A previous holder of the lock panicked mid-update.
        Poisoned { message: String } => "entity store lock poisoned: {message}",
    }
}

/// Serialised access to the service state.
pub trait EntityStore: Send + Sync {
    /// Run `operation` against a shared view of the collections.
    fn read<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&Collections) -> Result<T, E>,
        E: From<EntityStoreError>;

    /// Run `operation` with exclusive access to the collections.
    ///
    /// Changes made before `operation` returns an error are kept; callers
    /// validate first and mutate last.
    fn write<T, E, F>(&self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Collections) -> Result<T, E>,
        E: From<EntityStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Error, ErrorCode};

    #[test]
    fn poisoned_store_maps_to_internal_error() {
        let error: Error = EntityStoreError::poisoned("writer panicked").into();
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains("writer panicked"));
    }
}
