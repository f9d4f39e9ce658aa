//! User registration and lookup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{EntityStore, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Implements the user driving ports on top of an [`EntityStore`].
#[derive(Clone)]
pub struct UserRegistry<S> {
    store: Arc<S>,
}

impl<S> UserRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UsersCommand for UserRegistry<S>
where
    S: EntityStore,
{
    async fn create_user(&self, request: NewUser) -> Result<User, Error> {
        self.store.write(|collections| {
            if collections.user_by_email(&request.email).is_some() {
                debug!(email = %request.email, "rejected duplicate email");
                return Err(Error::duplicate_email(DUPLICATE_EMAIL_MESSAGE));
            }
            let user = collections.insert_user(request).clone();
            info!(user_id = %user.id(), role = %user.role(), "registered user");
            Ok(user)
        })
    }
}

#[async_trait]
impl<S> UsersQuery for UserRegistry<S>
where
    S: EntityStore,
{
    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.store.read(|collections| {
            collections
                .user(id)
                .cloned()
                .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.store
            .read(|collections| Ok::<_, Error>(collections.users().to_vec()))
    }
}
