//! Driving ports for registering and looking up users.
//!
//! HTTP handlers call these traits; [`UserRegistry`](crate::domain::UserRegistry)
//! is the production implementation.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user with a unique email address.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::DuplicateEmail`](crate::domain::ErrorCode::DuplicateEmail)
    /// when another user already holds the address.
    async fn create_user(&self, request: NewUser) -> Result<User, Error>;
}

/// Use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user by id.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Every registered user, in registration order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
