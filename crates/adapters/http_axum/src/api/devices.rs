//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_domain::device::{Device, DeviceBuilder};
use homehub_domain::house::House;
use homehub_domain::key::{DeviceKey, Keyed, RoomKey};
use homehub_domain::room::Room;
use homehub_domain::user::User;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, UpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/devices`
pub async fn list<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
) -> ListResponse<Device>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    ListResponse::Ok(Json(state.devices.list_devices()))
}

/// `GET /api/rooms/{house_name}/{name}/devices`
pub async fn list_in_room<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, room_name)): Path<(String, String)>,
) -> Result<ListResponse<Device>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let devices = state
        .devices
        .list_devices_in_room(&RoomKey::new(house_name, room_name))?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{house_name}/{room_name}/{name}`
pub async fn get<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, room_name, name)): Path<(String, String, String)>,
) -> Result<GetResponse<Device>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let key = DeviceKey::new(house_name, room_name, name);
    let device = state.devices.read_device(&key)?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Json(payload): Json<DeviceBuilder>,
) -> Result<CreateResponse<Device>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let created = state.devices.create_device(payload)?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/devices/{house_name}/{room_name}/{name}`
pub async fn update<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, room_name, name)): Path<(String, String, String)>,
    Json(payload): Json<DeviceBuilder>,
) -> Result<UpdateResponse<Device>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let key = DeviceKey::new(house_name, room_name, name);
    let updated = state.devices.update_device(&key, payload)?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/devices/{house_name}/{room_name}/{name}`
pub async fn delete<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, room_name, name)): Path<(String, String, String)>,
) -> Result<DeleteResponse<DeviceKey>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let key = DeviceKey::new(house_name, room_name, name);
    let removed = state.devices.delete_device(&key)?;
    Ok(DeleteResponse::removed(removed.key()))
}
