//! Common error types used across the workspace.
//!
//! Each failure kind is its own struct so callers can match on the
//! identifying fields; [`HomeHubError`] wraps them via `#[from]`.

use std::fmt;

use crate::key::{EntityKind, Keyed};

/// Top-level error returned by every core operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateKeyError),

    #[error(transparent)]
    Integrity(#[from] ReferentialIntegrityError),
}

/// Malformed or missing input on a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {entity} field `{field}`: {reason}")]
pub struct ValidationError {
    pub entity: EntityKind,
    pub field: &'static str,
    pub reason: Reason,
}

impl ValidationError {
    #[must_use]
    pub fn new(entity: EntityKind, field: &'static str, reason: Reason) -> Self {
        Self {
            entity,
            field,
            reason,
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The field was absent from the payload.
    Missing,
    /// The field was present but empty or whitespace only.
    Empty,
    /// The field does not match the expected shape.
    Format(&'static str),
    /// The field must hold a whole number.
    NotAnInteger,
    /// The payload tried to change part of the entity key.
    KeyChanged,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required"),
            Self::Empty => f.write_str("must not be empty"),
            Self::Format(expected) => write!(f, "must be {expected}"),
            Self::NotAnInteger => f.write_str("must be an integer"),
            Self::KeyChanged => f.write_str("cannot change key field"),
        }
    }
}

/// Read, update, or delete targeted a key that is not stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{key}` not found")]
pub struct NotFoundError {
    pub entity: EntityKind,
    pub key: String,
}

impl NotFoundError {
    #[must_use]
    pub fn for_key<V: Keyed>(key: &V::Key) -> Self {
        Self {
            entity: V::KIND,
            key: key.to_string(),
        }
    }
}

/// Create targeted a key that is already stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{key}` already exists")]
pub struct DuplicateKeyError {
    pub entity: EntityKind,
    pub key: String,
}

impl DuplicateKeyError {
    #[must_use]
    pub fn for_key<V: Keyed>(key: &V::Key) -> Self {
        Self {
            entity: V::KIND,
            key: key.to_string(),
        }
    }
}

/// A required parent reference does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("referenced {missing_kind} `{missing_key}` does not exist")]
pub struct ReferentialIntegrityError {
    pub missing_kind: EntityKind,
    pub missing_key: String,
}

impl ReferentialIntegrityError {
    #[must_use]
    pub fn for_key<V: Keyed>(key: &V::Key) -> Self {
        Self {
            missing_kind: V::KIND,
            missing_key: key.to_string(),
        }
    }
}
