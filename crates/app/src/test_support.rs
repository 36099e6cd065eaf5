//! Test doubles for the port traits.

use std::sync::{Arc, Mutex};

use homehub_domain::device::Device;
use homehub_domain::error::{DuplicateKeyError, NotFoundError};
use homehub_domain::event::Event;
use homehub_domain::house::House;
use homehub_domain::key::Keyed;
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::integrity::IntegrityGraph;
use crate::ports::{EntityStore, EventPublisher};
use crate::services::device_service::DeviceService;
use crate::services::house_service::HouseService;
use crate::services::room_service::RoomService;
use crate::services::user_service::UserService;

/// Linear-scan store, enough for unit tests.
pub(crate) struct VecStore<V> {
    entries: Mutex<Vec<V>>,
}

impl<V> Default for VecStore<V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl<V: Keyed + Clone + Send + Sync> EntityStore<V> for VecStore<V> {
    fn create(&self, value: V) -> Result<V, DuplicateKeyError> {
        let mut entries = self.entries.lock().unwrap();
        let key = value.key();
        if entries.iter().any(|e| e.key() == key) {
            return Err(DuplicateKeyError::for_key::<V>(&key));
        }
        entries.push(value.clone());
        Ok(value)
    }

    fn read(&self, key: &V::Key) -> Result<V, NotFoundError> {
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|e| &e.key() == key)
            .cloned()
            .ok_or_else(|| NotFoundError::for_key::<V>(key))
    }

    fn update(&self, value: V) -> Result<V, NotFoundError> {
        let mut entries = self.entries.lock().unwrap();
        let key = value.key();
        let slot = entries
            .iter_mut()
            .find(|e| e.key() == key)
            .ok_or_else(|| NotFoundError::for_key::<V>(&key))?;
        *slot = value.clone();
        Ok(value)
    }

    fn delete(&self, key: &V::Key) -> Result<V, NotFoundError> {
        let mut entries = self.entries.lock().unwrap();
        let index = entries
            .iter()
            .position(|e| &e.key() == key)
            .ok_or_else(|| NotFoundError::for_key::<V>(key))?;
        Ok(entries.remove(index))
    }

    fn list(&self) -> Vec<V> {
        self.entries.lock().unwrap().clone()
    }

    fn contains(&self, key: &V::Key) -> bool {
        self.entries.lock().unwrap().iter().any(|e| &e.key() == key)
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Publisher that keeps every event for later inspection.
#[derive(Default)]
pub(crate) struct RecordingPublisher {
    events: Mutex<Vec<Event>>,
}

impl RecordingPublisher {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

pub(crate) type Users = Arc<VecStore<User>>;
pub(crate) type Houses = Arc<VecStore<House>>;
pub(crate) type Rooms = Arc<VecStore<Room>>;
pub(crate) type Devices = Arc<VecStore<Device>>;
pub(crate) type Publisher = Arc<RecordingPublisher>;

/// All four services wired over shared in-memory stores.
pub(crate) struct Hub {
    pub users: UserService<Users, Publisher>,
    pub houses: HouseService<Users, Houses, Rooms, Publisher>,
    pub rooms: RoomService<Users, Houses, Rooms, Publisher>,
    pub devices: DeviceService<Users, Houses, Rooms, Devices, Publisher>,
    pub publisher: Publisher,
}

pub(crate) fn hub() -> Hub {
    let users: Users = Arc::default();
    let houses: Houses = Arc::default();
    let rooms: Rooms = Arc::default();
    let devices: Devices = Arc::default();
    let publisher: Publisher = Arc::default();

    let integrity = IntegrityGraph::new(
        Arc::clone(&users),
        Arc::clone(&houses),
        Arc::clone(&rooms),
    );

    Hub {
        users: UserService::new(Arc::clone(&users), Arc::clone(&publisher)),
        houses: HouseService::new(
            Arc::clone(&houses),
            integrity.clone(),
            Arc::clone(&publisher),
        ),
        rooms: RoomService::new(
            Arc::clone(&rooms),
            integrity.clone(),
            Arc::clone(&publisher),
        ),
        devices: DeviceService::new(devices, integrity, Arc::clone(&publisher)),
        publisher,
    }
}
