//! User service: use-cases for managing users.

use homehub_domain::error::HomeHubError;
use homehub_domain::event::{Event, EventType};
use homehub_domain::key::UserKey;
use homehub_domain::user::{User, UserBuilder};

use crate::ports::{EntityStore, EventPublisher};

/// Application service for user CRUD operations.
///
/// Users have no parent, so no referential checks apply on write.
pub struct UserService<S, P> {
    store: S,
    publisher: P,
}

impl<S, P> UserService<S, P>
where
    S: EntityStore<User>,
    P: EventPublisher,
{
    /// Create a new service backed by the given store and publisher.
    pub fn new(store: S, publisher: P) -> Self {
        Self { store, publisher }
    }

    /// Validate the payload and store a new user.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`] if a field is invalid, or
    /// [`HomeHubError::Duplicate`] if the username is taken.
    #[tracing::instrument(skip_all)]
    pub fn create_user(&self, payload: UserBuilder) -> Result<User, HomeHubError> {
        let user = payload.build()?;
        let created = self.store.create(user)?;
        tracing::debug!(username = %created.username, "user created");
        self.publisher
            .publish(Event::for_entity(EventType::Created, &created));
        Ok(created)
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such user exists.
    pub fn read_user(&self, key: &UserKey) -> Result<User, HomeHubError> {
        self.store.read(key).map_err(HomeHubError::from)
    }

    /// List all users in creation order.
    pub fn list_users(&self) -> Vec<User> {
        self.store.list()
    }

    /// Replace every non-key field of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`] if the payload is invalid or
    /// renames the user, or [`HomeHubError::NotFound`] if the user is
    /// missing.
    #[tracing::instrument(skip(self, payload), fields(username = %key))]
    pub fn update_user(&self, key: &UserKey, payload: UserBuilder) -> Result<User, HomeHubError> {
        let user = payload.for_key(key)?.build()?;
        let updated = self.store.update(user)?;
        tracing::debug!("user updated");
        self.publisher
            .publish(Event::for_entity(EventType::Updated, &updated));
        Ok(updated)
    }

    /// Delete a user, returning the removed value.
    ///
    /// Houses naming the user as owner are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such user exists.
    #[tracing::instrument(skip(self), fields(username = %key))]
    pub fn delete_user(&self, key: &UserKey) -> Result<User, HomeHubError> {
        let removed = self.store.delete(key)?;
        tracing::debug!("user deleted");
        self.publisher
            .publish(Event::for_entity(EventType::Deleted, &removed));
        Ok(removed)
    }
}
