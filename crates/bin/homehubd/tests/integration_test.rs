//! End-to-end smoke tests for the full homehubd stack.
//!
//! Each test spins up the complete application (in-memory stores, real
//! services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use homehub_adapter_http_axum::router;
use homehub_adapter_http_axum::state::AppState;
use homehub_adapter_storage_memory::InMemoryStore;
use homehub_app::event_bus::InProcessEventBus;
use homehub_app::integrity::IntegrityGraph;
use homehub_app::services::device_service::DeviceService;
use homehub_app::services::house_service::HouseService;
use homehub_app::services::room_service::RoomService;
use homehub_app::services::user_service::UserService;
use homehub_domain::device::Device;
use homehub_domain::house::House;
use homehub_domain::room::Room;
use homehub_domain::user::User;

/// Build a fully-wired router over fresh in-memory stores.
fn app_with_bus() -> (axum::Router, Arc<InProcessEventBus>) {
    let users = Arc::new(InMemoryStore::<User>::new());
    let houses = Arc::new(InMemoryStore::<House>::new());
    let rooms = Arc::new(InMemoryStore::<Room>::new());
    let devices = Arc::new(InMemoryStore::<Device>::new());
    let event_bus = Arc::new(InProcessEventBus::new(256));

    let integrity = IntegrityGraph::new(
        Arc::clone(&users),
        Arc::clone(&houses),
        Arc::clone(&rooms),
    );

    let state = AppState::new(
        UserService::new(users, Arc::clone(&event_bus)),
        HouseService::new(houses, integrity.clone(), Arc::clone(&event_bus)),
        RoomService::new(rooms, integrity.clone(), Arc::clone(&event_bus)),
        DeviceService::new(devices, integrity, Arc::clone(&event_bus)),
    );

    (router::build(state), event_bus)
}

fn app() -> axum::Router {
    app_with_bus().0
}

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn john() -> Value {
    json!({
        "name": "John Doe",
        "username": "johndoe",
        "phone": "+1234567890",
        "email": "john@example.com",
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

// ---------------------------------------------------------------------------
// API: the user → house → room → device walk-through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_build_hierarchy_and_reject_bad_writes() {
    let app = app();

    // User
    let (status, body) = call(&app, "POST", "/api/users", Some(john())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, john());

    // House owned by the user
    let house = json!({"name": "Smart Home", "address": "123 Main St", "owner_username": "johndoe"});
    let (status, body) = call(&app, "POST", "/api/houses", Some(house)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["owner_username"], "johndoe");

    // Room in the house
    let room = json!({
        "house_name": "Smart Home",
        "name": "Living Room",
        "floor": 1,
        "size": "Large",
        "metadata": {"color": "Blue"},
    });
    let (status, body) = call(&app, "POST", "/api/rooms", Some(room)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["metadata"]["color"], "Blue");

    // Device in the room
    let device = json!({
        "house_name": "Smart Home",
        "room_name": "Living Room",
        "type": "Light",
        "name": "Ceiling Light",
    });
    let (status, body) = call(&app, "POST", "/api/devices", Some(device)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "Light");

    // Device in a room that does not exist
    let lamp = json!({
        "house_name": "Smart Home",
        "room_name": "Kitchen",
        "type": "Light",
        "name": "Lamp",
    });
    let (status, body) = call(&app, "POST", "/api/devices", Some(lamp)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "referenced room `Smart Home/Kitchen` does not exist");

    // Invalid phone on update leaves the user untouched
    let mut update = john();
    update["phone"] = json!("invalid-phone");
    let (status, _) = call(&app, "PUT", "/api/users/johndoe", Some(update)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, "GET", "/api/users/johndoe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, john());
}

#[tokio::test]
async fn should_reject_device_when_room_only_exists_in_other_house() {
    let app = app();
    call(&app, "POST", "/api/houses", Some(json!({"name": "Smart Home"}))).await;
    call(&app, "POST", "/api/houses", Some(json!({"name": "Beach House"}))).await;
    let kitchen = json!({"house_name": "Beach House", "name": "Kitchen", "floor": 0, "size": "Small"});
    call(&app, "POST", "/api/rooms", Some(kitchen)).await;

    let device = json!({"house_name": "Smart Home", "room_name": "Kitchen", "type": "Light", "name": "Lamp"});
    let (status, _) = call(&app, "POST", "/api/devices", Some(device)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/devices", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_keep_first_user_when_duplicate_posted() {
    let app = app();
    call(&app, "POST", "/api/users", Some(john())).await;

    let mut impostor = john();
    impostor["name"] = json!("Impostor");
    let (status, body) = call(&app, "POST", "/api/users", Some(impostor)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "user `johndoe` already exists");

    let (_, body) = call(&app, "GET", "/api/users/johndoe", None).await;
    assert_eq!(body["name"], "John Doe");
}

#[tokio::test]
async fn should_return_not_found_after_delete() {
    let app = app();
    call(&app, "POST", "/api/users", Some(john())).await;

    let (status, body) = call(&app, "DELETE", "/api/users/johndoe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": "johndoe"}));

    let (status, _) = call(&app, "GET", "/api/users/johndoe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, "DELETE", "/api/users/johndoe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_leave_rooms_dangling_when_house_deleted() {
    let app = app();
    call(&app, "POST", "/api/houses", Some(json!({"name": "Smart Home"}))).await;
    let room = json!({"house_name": "Smart Home", "name": "Kitchen", "floor": 0, "size": "Small"});
    call(&app, "POST", "/api/rooms", Some(room)).await;

    let (status, _) = call(&app, "DELETE", "/api/houses/Smart%20Home", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, "GET", "/api/rooms/Smart%20Home/Kitchen", None).await;
    assert_eq!(status, StatusCode::OK);

    let device = json!({"house_name": "Smart Home", "room_name": "Kitchen", "type": "Oven", "name": "Oven"});
    let (status, body) = call(&app, "POST", "/api/devices", Some(device)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "referenced house `Smart Home` does not exist");
}

#[tokio::test]
async fn should_list_devices_of_room_in_creation_order() {
    let app = app();
    call(&app, "POST", "/api/houses", Some(json!({"name": "Smart Home"}))).await;
    let room = json!({"house_name": "Smart Home", "name": "Living Room", "floor": 1, "size": "Large"});
    call(&app, "POST", "/api/rooms", Some(room)).await;
    for name in ["Ceiling Light", "Thermostat", "Speaker"] {
        let device = json!({"house_name": "Smart Home", "room_name": "Living Room", "type": "Generic", "name": name});
        call(&app, "POST", "/api/devices", Some(device)).await;
    }

    let uri = "/api/rooms/Smart%20Home/Living%20Room/devices";
    let (status, first) = call(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = call(&app, "GET", uri, None).await;
    assert_eq!(first, second);

    let names: Vec<&str> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ceiling Light", "Thermostat", "Speaker"]);
}

// ---------------------------------------------------------------------------
// Audit events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_publish_audit_event_per_successful_write() {
    let (app, event_bus) = app_with_bus();
    let mut events = event_bus.subscribe();

    call(&app, "POST", "/api/users", Some(john())).await;
    call(&app, "POST", "/api/users", Some(john())).await;
    call(&app, "DELETE", "/api/users/johndoe", None).await;

    let created = events.recv().await.unwrap();
    assert_eq!(created.event_type.to_string(), "created");
    assert_eq!(created.key, "johndoe");
    assert_eq!(created.data["email"], "john@example.com");

    let deleted = events.recv().await.unwrap();
    assert_eq!(deleted.event_type.to_string(), "deleted");
    assert!(events.try_recv().is_err());
}
