//! # homehub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EntityStore`: keyed CRUD for one entity kind
//!   - `EventPublisher`: receives an audit event after each mutation
//! - Check references between parents and children (`IntegrityGraph`)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`, `HouseService`, `RoomService`, `DeviceService`
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `homehub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod integrity;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;
