//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_domain::device::Device;
use homehub_domain::house::House;
use homehub_domain::key::{HouseKey, Keyed, RoomKey};
use homehub_domain::room::{Room, RoomBuilder};
use homehub_domain::user::User;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, UpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/rooms`
pub async fn list<U, H, R, D, P>(State(state): State<AppState<U, H, R, D, P>>) -> ListResponse<Room>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    ListResponse::Ok(Json(state.rooms.list_rooms()))
}

/// `GET /api/houses/{name}/rooms`
pub async fn list_in_house<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(house_name): Path<String>,
) -> Result<ListResponse<Room>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let rooms = state
        .rooms
        .list_rooms_in_house(&HouseKey::new(house_name))?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `GET /api/rooms/{house_name}/{name}`
pub async fn get<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, name)): Path<(String, String)>,
) -> Result<GetResponse<Room>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let room = state.rooms.read_room(&RoomKey::new(house_name, name))?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /api/rooms`
pub async fn create<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Json(payload): Json<RoomBuilder>,
) -> Result<CreateResponse<Room>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let created = state.rooms.create_room(payload)?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/rooms/{house_name}/{name}`
pub async fn update<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, name)): Path<(String, String)>,
    Json(payload): Json<RoomBuilder>,
) -> Result<UpdateResponse<Room>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let updated = state
        .rooms
        .update_room(&RoomKey::new(house_name, name), payload)?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/rooms/{house_name}/{name}`
pub async fn delete<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path((house_name, name)): Path<(String, String)>,
) -> Result<DeleteResponse<RoomKey>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let removed = state.rooms.delete_room(&RoomKey::new(house_name, name))?;
    Ok(DeleteResponse::removed(removed.key()))
}
