//! Referential checks between parent and child entities.
//!
//! Every check is a read-only lookup that takes and releases the parent
//! store's lock on its own; no check holds two locks at once. A parent can
//! therefore disappear between the check and the caller's write.

use homehub_domain::device::Device;
use homehub_domain::error::{NotFoundError, ReferentialIntegrityError};
use homehub_domain::house::House;
use homehub_domain::key::{HouseKey, RoomKey};
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::ports::EntityStore;

/// Read-only view over the parent stores used to validate references.
///
/// Cheap to clone when the stores are shared handles (`Arc`).
#[derive(Clone)]
pub struct IntegrityGraph<U, H, R> {
    users: U,
    houses: H,
    rooms: R,
}

impl<U, H, R> IntegrityGraph<U, H, R>
where
    U: EntityStore<User>,
    H: EntityStore<House>,
    R: EntityStore<Room>,
{
    /// Create a graph over the given parent stores.
    pub fn new(users: U, houses: H, rooms: R) -> Self {
        Self {
            users,
            houses,
            rooms,
        }
    }

    /// A house's owner, when named, must be an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`ReferentialIntegrityError`] naming the missing user.
    pub fn check_house(&self, house: &House) -> Result<(), ReferentialIntegrityError> {
        match house.owner() {
            Some(owner) if !self.users.contains(&owner) => {
                Err(ReferentialIntegrityError::for_key::<User>(&owner))
            }
            _ => Ok(()),
        }
    }

    /// A room's house must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ReferentialIntegrityError`] naming the missing house.
    pub fn check_room(&self, room: &Room) -> Result<(), ReferentialIntegrityError> {
        let house = room.house();
        if !self.houses.contains(&house) {
            return Err(ReferentialIntegrityError::for_key::<House>(&house));
        }
        Ok(())
    }

    /// A device's room must exist under the device's own house, and that
    /// house must exist.
    ///
    /// The room lookup uses the compound key, so a room with the same name
    /// in another house does not satisfy it. The house is checked separately
    /// because deleting a house leaves its rooms in place.
    ///
    /// # Errors
    ///
    /// Returns [`ReferentialIntegrityError`] naming the missing room or
    /// house.
    pub fn check_device(&self, device: &Device) -> Result<(), ReferentialIntegrityError> {
        let room = device.room();
        if !self.rooms.contains(&room) {
            return Err(ReferentialIntegrityError::for_key::<Room>(&room));
        }
        let house = device.house();
        if !self.houses.contains(&house) {
            return Err(ReferentialIntegrityError::for_key::<House>(&house));
        }
        Ok(())
    }

    /// Fail unless `key` names an existing house.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] for the house.
    pub fn require_house(&self, key: &HouseKey) -> Result<(), NotFoundError> {
        if !self.houses.contains(key) {
            return Err(NotFoundError::for_key::<House>(key));
        }
        Ok(())
    }

    /// Fail unless `key` names an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] for the room.
    pub fn require_room(&self, key: &RoomKey) -> Result<(), NotFoundError> {
        if !self.rooms.contains(key) {
            return Err(NotFoundError::for_key::<Room>(key));
        }
        Ok(())
    }
}
