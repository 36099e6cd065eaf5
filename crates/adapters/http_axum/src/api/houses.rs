//! JSON REST handlers for houses.

use axum::Json;
use axum::extract::{Path, State};

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_domain::device::Device;
use homehub_domain::house::{House, HouseBuilder};
use homehub_domain::key::{HouseKey, Keyed};
use homehub_domain::room::Room;
use homehub_domain::user::User;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, UpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/houses`
pub async fn list<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
) -> ListResponse<House>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    ListResponse::Ok(Json(state.houses.list_houses()))
}

/// `GET /api/houses/{name}`
pub async fn get<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(name): Path<String>,
) -> Result<GetResponse<House>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let house = state.houses.read_house(&HouseKey::new(name))?;
    Ok(GetResponse::Ok(Json(house)))
}

/// `POST /api/houses`
pub async fn create<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Json(payload): Json<HouseBuilder>,
) -> Result<CreateResponse<House>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let created = state.houses.create_house(payload)?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/houses/{name}`
pub async fn update<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(name): Path<String>,
    Json(payload): Json<HouseBuilder>,
) -> Result<UpdateResponse<House>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let updated = state.houses.update_house(&HouseKey::new(name), payload)?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/houses/{name}`
pub async fn delete<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(name): Path<String>,
) -> Result<DeleteResponse<HouseKey>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let removed = state.houses.delete_house(&HouseKey::new(name))?;
    Ok(DeleteResponse::removed(removed.key()))
}
