//! Shared application state for axum handlers.

use std::sync::Arc;

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_app::services::device_service::DeviceService;
use homehub_app::services::house_service::HouseService;
use homehub_app::services::room_service::RoomService;
use homehub_app::services::user_service::UserService;
use homehub_domain::device::Device;
use homehub_domain::house::House;
use homehub_domain::room::Room;
use homehub_domain::user::User;

/// Application state shared across all axum handlers.
///
/// Generic over the four store types and the event publisher to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<U, H, R, D, P> {
    /// User CRUD service.
    pub users: Arc<UserService<U, P>>,
    /// House CRUD service.
    pub houses: Arc<HouseService<U, H, R, P>>,
    /// Room CRUD service.
    pub rooms: Arc<RoomService<U, H, R, P>>,
    /// Device CRUD service.
    pub devices: Arc<DeviceService<U, H, R, D, P>>,
}

impl<U, H, R, D, P> Clone for AppState<U, H, R, D, P> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            houses: Arc::clone(&self.houses),
            rooms: Arc::clone(&self.rooms),
            devices: Arc::clone(&self.devices),
        }
    }
}

impl<U, H, R, D, P> AppState<U, H, R, D, P>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        users: UserService<U, P>,
        houses: HouseService<U, H, R, P>,
        rooms: RoomService<U, H, R, P>,
        devices: DeviceService<U, H, R, D, P>,
    ) -> Self {
        Self {
            users: Arc::new(users),
            houses: Arc::new(houses),
            rooms: Arc::new(rooms),
            devices: Arc::new(devices),
        }
    }
}
