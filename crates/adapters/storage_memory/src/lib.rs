//! # homehub-adapter-storage-memory
//!
//! Process-lifetime, in-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`EntityStore`](homehub_app::ports::EntityStore) port for
//!   every entity kind with one generic type
//! - Keep values in insertion order for listing
//! - Guard each store with its own reader/writer lock
//!
//! Nothing is written to disk; all data is lost when the process exits.
//!
//! ## Dependency rule
//! Depends on `homehub-app` (for port traits) and `homehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod store;

pub use store::InMemoryStore;
