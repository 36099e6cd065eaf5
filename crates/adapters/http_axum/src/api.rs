//! JSON REST API handler modules.
//!
//! Every entity kind exposes the same five operations; the key segments of
//! the path identify the entity for read, update, and delete.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod houses;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use homehub_app::ports::{EntityStore, EventPublisher};
use homehub_domain::device::Device;
use homehub_domain::house::House;
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::state::AppState;

/// Possible responses from a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get endpoint.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from an update endpoint.
pub enum UpdateResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for UpdateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Body of a successful delete: the key that was removed.
#[derive(Serialize)]
pub struct Deleted<K> {
    pub deleted: K,
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse<K> {
    Ok(Json<Deleted<K>>),
}

impl<K> DeleteResponse<K> {
    fn removed(deleted: K) -> Self {
        Self::Ok(Json(Deleted { deleted }))
    }
}

impl<K: Serialize> IntoResponse for DeleteResponse<K> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Build the `/api` sub-router.
pub fn routes<U, H, R, D, P>() -> Router<AppState<U, H, R, D, P>>
where
    U: EntityStore<User> + 'static,
    H: EntityStore<House> + 'static,
    R: EntityStore<Room> + 'static,
    D: EntityStore<Device> + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        // Users
        .route(
            "/users",
            get(users::list::<U, H, R, D, P>).post(users::create::<U, H, R, D, P>),
        )
        .route(
            "/users/{username}",
            get(users::get::<U, H, R, D, P>)
                .put(users::update::<U, H, R, D, P>)
                .delete(users::delete::<U, H, R, D, P>),
        )
        // Houses
        .route(
            "/houses",
            get(houses::list::<U, H, R, D, P>).post(houses::create::<U, H, R, D, P>),
        )
        .route(
            "/houses/{name}",
            get(houses::get::<U, H, R, D, P>)
                .put(houses::update::<U, H, R, D, P>)
                .delete(houses::delete::<U, H, R, D, P>),
        )
        .route(
            "/houses/{name}/rooms",
            get(rooms::list_in_house::<U, H, R, D, P>),
        )
        // Rooms
        .route(
            "/rooms",
            get(rooms::list::<U, H, R, D, P>).post(rooms::create::<U, H, R, D, P>),
        )
        .route(
            "/rooms/{house_name}/{name}",
            get(rooms::get::<U, H, R, D, P>)
                .put(rooms::update::<U, H, R, D, P>)
                .delete(rooms::delete::<U, H, R, D, P>),
        )
        .route(
            "/rooms/{house_name}/{name}/devices",
            get(devices::list_in_room::<U, H, R, D, P>),
        )
        // Devices
        .route(
            "/devices",
            get(devices::list::<U, H, R, D, P>).post(devices::create::<U, H, R, D, P>),
        )
        .route(
            "/devices/{house_name}/{room_name}/{name}",
            get(devices::get::<U, H, R, D, P>)
                .put(devices::update::<U, H, R, D, P>)
                .delete(devices::delete::<U, H, R, D, P>),
        )
}
