//! # homehub-domain
//!
//! Pure domain model for the homehub entity service.
//!
//! ## Responsibilities
//! - Foundational types: typed keys, error taxonomy, audit events
//! - Define **Users** (people who may own houses)
//! - Define **Houses** (roots of the hierarchy, optionally owned)
//! - Define **Rooms** (spaces inside a house)
//! - Define **Devices** (things placed in a room)
//! - Field-level validation of a single payload
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! Cross-entity checks need storage and therefore live in `homehub-app`.

pub mod error;
pub mod event;
pub mod key;
pub mod metadata;
pub mod validation;

pub mod device;
pub mod house;
pub mod room;
pub mod user;
