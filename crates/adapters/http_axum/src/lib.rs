//! # homehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for the four entity kinds
//!   (`/api/users`, `/api/houses`, `/api/rooms`, `/api/devices`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map service results and errors into HTTP responses and status codes
//!
//! Request bodies deserialize straight into the domain builders, so field
//! validation happens once, in the domain, not here.
//!
//! ## Dependency rule
//! Depends on `homehub-app` (for port traits and services) and `homehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
