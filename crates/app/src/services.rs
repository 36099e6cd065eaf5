//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Every write runs validation, then the referential checks, then the store
//! mutation; a failure at any step leaves the stores untouched.

pub mod device_service;
pub mod house_service;
pub mod room_service;
pub mod user_service;
