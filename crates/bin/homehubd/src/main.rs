//! # homehubd: homehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize structured logging
//! - Construct one in-memory store per entity kind (adapters)
//! - Construct application services, injecting stores via port traits
//! - Subscribe the audit log to the event bus
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use homehub_adapter_http_axum::state::AppState;
use homehub_adapter_storage_memory::InMemoryStore;
use homehub_app::event_bus::InProcessEventBus;
use homehub_app::integrity::IntegrityGraph;
use homehub_app::ports::EntityStore;
use homehub_app::services::device_service::DeviceService;
use homehub_app::services::house_service::HouseService;
use homehub_app::services::room_service::RoomService;
use homehub_app::services::user_service::UserService;
use homehub_domain::device::Device;
use homehub_domain::event::Event;
use homehub_domain::house::House;
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Stores
    let users = Arc::new(InMemoryStore::<User>::new());
    let houses = Arc::new(InMemoryStore::<House>::new());
    let rooms = Arc::new(InMemoryStore::<Room>::new());
    let devices = Arc::new(InMemoryStore::<Device>::new());

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(config.events.capacity));
    let audit = tokio::spawn(log_events(event_bus.subscribe()));

    // Services
    let integrity = IntegrityGraph::new(
        Arc::clone(&users),
        Arc::clone(&houses),
        Arc::clone(&rooms),
    );
    let state = AppState::new(
        UserService::new(Arc::clone(&users), Arc::clone(&event_bus)),
        HouseService::new(
            Arc::clone(&houses),
            integrity.clone(),
            Arc::clone(&event_bus),
        ),
        RoomService::new(Arc::clone(&rooms), integrity.clone(), Arc::clone(&event_bus)),
        DeviceService::new(Arc::clone(&devices), integrity, event_bus),
    );

    // HTTP
    let app = homehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "homehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    audit.abort();
    tracing::info!(
        users = users.len(),
        houses = houses.len(),
        rooms = rooms.len(),
        devices = devices.len(),
        "homehubd stopped"
    );
    Ok(())
}

/// Write every audit event to the structured log until the bus closes.
async fn log_events(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(event) => tracing::info!(
                event_id = %event.id,
                event_type = %event.event_type,
                kind = %event.kind,
                key = %event.key,
                timestamp = %event.timestamp,
                "audit"
            ),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "audit log fell behind, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Resolve on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}
