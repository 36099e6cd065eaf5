//! House service: use-cases for managing houses.

use homehub_domain::error::HomeHubError;
use homehub_domain::event::{Event, EventType};
use homehub_domain::house::{House, HouseBuilder};
use homehub_domain::key::HouseKey;
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::integrity::IntegrityGraph;
use crate::ports::{EntityStore, EventPublisher};

/// Application service for house CRUD operations.
pub struct HouseService<U, H, R, P> {
    store: H,
    integrity: IntegrityGraph<U, H, R>,
    publisher: P,
}

impl<U, H, R, P> HouseService<U, H, R, P>
where
    U: EntityStore<User>,
    H: EntityStore<House>,
    R: EntityStore<Room>,
    P: EventPublisher,
{
    /// Create a new service writing to `store` and checking owners through
    /// `integrity`.
    pub fn new(store: H, integrity: IntegrityGraph<U, H, R>, publisher: P) -> Self {
        Self {
            store,
            integrity,
            publisher,
        }
    }

    /// Validate the payload, check the owner, and store a new house.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`] for an invalid payload,
    /// [`HomeHubError::Integrity`] when the named owner does not exist, or
    /// [`HomeHubError::Duplicate`] if the name is taken.
    #[tracing::instrument(skip_all)]
    pub fn create_house(&self, payload: HouseBuilder) -> Result<House, HomeHubError> {
        let house = payload.build()?;
        self.integrity.check_house(&house)?;
        let created = self.store.create(house)?;
        tracing::debug!(house = %created.name, "house created");
        self.publisher
            .publish(Event::for_entity(EventType::Created, &created));
        Ok(created)
    }

    /// Look up a house by name.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such house exists.
    pub fn read_house(&self, key: &HouseKey) -> Result<House, HomeHubError> {
        self.store.read(key).map_err(HomeHubError::from)
    }

    /// List all houses in creation order.
    pub fn list_houses(&self) -> Vec<House> {
        self.store.list()
    }

    /// Replace every non-key field of an existing house.
    ///
    /// The owner is re-checked since the payload may name a different one.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`], [`HomeHubError::Integrity`], or
    /// [`HomeHubError::NotFound`].
    #[tracing::instrument(skip(self, payload), fields(house = %key))]
    pub fn update_house(
        &self,
        key: &HouseKey,
        payload: HouseBuilder,
    ) -> Result<House, HomeHubError> {
        let house = payload.for_key(key)?.build()?;
        self.integrity.check_house(&house)?;
        let updated = self.store.update(house)?;
        tracing::debug!("house updated");
        self.publisher
            .publish(Event::for_entity(EventType::Updated, &updated));
        Ok(updated)
    }

    /// Delete a house, returning the removed value.
    ///
    /// Rooms and devices inside the house are not removed.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such house exists.
    #[tracing::instrument(skip(self), fields(house = %key))]
    pub fn delete_house(&self, key: &HouseKey) -> Result<House, HomeHubError> {
        let removed = self.store.delete(key)?;
        tracing::debug!("house deleted");
        self.publisher
            .publish(Event::for_entity(EventType::Deleted, &removed));
        Ok(removed)
    }
}
