//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_domain::device::Device;
use homehub_domain::house::House;
use homehub_domain::key::{Keyed, UserKey};
use homehub_domain::room::Room;
use homehub_domain::user::{User, UserBuilder};

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, UpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/users`
pub async fn list<U, H, R, D, P>(State(state): State<AppState<U, H, R, D, P>>) -> ListResponse<User>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    ListResponse::Ok(Json(state.users.list_users()))
}

/// `GET /api/users/{username}`
pub async fn get<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(username): Path<String>,
) -> Result<GetResponse<User>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let user = state.users.read_user(&UserKey::new(username))?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Json(payload): Json<UserBuilder>,
) -> Result<CreateResponse<User>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let created = state.users.create_user(payload)?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/users/{username}`
pub async fn update<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(username): Path<String>,
    Json(payload): Json<UserBuilder>,
) -> Result<UpdateResponse<User>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let updated = state
        .users
        .update_user(&UserKey::new(username), payload)?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/users/{username}`
pub async fn delete<U, H, R, D, P>(
    State(state): State<AppState<U, H, R, D, P>>,
    Path(username): Path<String>,
) -> Result<DeleteResponse<UserKey>, ApiError>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    let removed = state.users.delete_user(&UserKey::new(username))?;
    Ok(DeleteResponse::removed(removed.key()))
}
