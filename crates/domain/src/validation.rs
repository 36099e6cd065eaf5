//! Field-level checks shared by the entity validators.
//!
//! Nothing here looks at other entities; each check sees one field of one
//! payload.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Reason, ValidationError};
use crate::key::EntityKind;

const PHONE_PATTERN: &str = r"^\+?[0-9]+$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// `true` when `phone` is an optional leading `+` followed by digits.
///
/// Only ASCII `0-9` count as digits; other Unicode decimal digits such as
/// `١٢٣` are rejected.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX
        .get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
        .is_match(phone)
}

/// `true` when `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
        .is_match(email)
}

pub(crate) fn required(
    entity: EntityKind,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::new(entity, field, Reason::Missing))
}

pub(crate) fn non_empty(
    entity: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(entity, field, Reason::Empty));
    }
    Ok(())
}

/// Accept only JSON integers; strings and fractional numbers are rejected.
pub(crate) fn integer(
    entity: EntityKind,
    field: &'static str,
    value: Option<&serde_json::Value>,
) -> Result<i64, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(entity, field, Reason::Missing))?;
    value
        .as_i64()
        .ok_or_else(|| ValidationError::new(entity, field, Reason::NotAnInteger))
}

/// Reject a payload key field that disagrees with the addressed key.
pub(crate) fn same_key(
    entity: EntityKind,
    field: &'static str,
    payload: Option<&str>,
    key: &str,
) -> Result<(), ValidationError> {
    match payload {
        Some(value) if value != key => {
            Err(ValidationError::new(entity, field, Reason::KeyChanged))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_phone_with_or_without_plus() {
        assert!(is_valid_phone("+1234567890"));
        assert!(is_valid_phone("0123"));
    }

    #[test]
    fn should_reject_phone_with_other_characters() {
        for phone in ["invalid-phone", "+", "", "12 34", "++12", "12+34", "123a"] {
            assert!(!is_valid_phone(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn should_reject_non_ascii_digits_in_phone() {
        assert!(!is_valid_phone("+١٢٣٤"));
        assert!(!is_valid_phone("１２３"));
    }

    #[test]
    fn should_accept_structurally_valid_email() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
    }

    #[test]
    fn should_reject_email_without_at_or_dot_after_it() {
        for email in [
            "invalid-email",
            "john.doe@example",
            "@example.com",
            "john@.com",
            "john@example.",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn should_treat_whitespace_only_as_empty() {
        let err = non_empty(EntityKind::House, "name", "   ").unwrap_err();
        assert_eq!(err.reason, Reason::Empty);
    }

    #[test]
    fn should_reject_non_integer_json() {
        let floor = serde_json::json!("invalid_floor");
        let err = integer(EntityKind::Room, "floor", Some(&floor)).unwrap_err();
        assert_eq!(err.reason, Reason::NotAnInteger);

        let floor = serde_json::json!(1.5);
        let err = integer(EntityKind::Room, "floor", Some(&floor)).unwrap_err();
        assert_eq!(err.reason, Reason::NotAnInteger);
    }

    #[test]
    fn should_report_missing_integer() {
        let err = integer(EntityKind::Room, "floor", None).unwrap_err();
        assert_eq!(err.reason, Reason::Missing);
    }

    #[test]
    fn should_allow_absent_or_equal_key_field() {
        assert!(same_key(EntityKind::User, "username", None, "johndoe").is_ok());
        assert!(same_key(EntityKind::User, "username", Some("johndoe"), "johndoe").is_ok());
        let err = same_key(EntityKind::User, "username", Some("jane"), "johndoe").unwrap_err();
        assert_eq!(err.reason, Reason::KeyChanged);
    }
}
