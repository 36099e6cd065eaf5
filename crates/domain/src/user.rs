//! User: a person who may own houses.

use serde::{Deserialize, Serialize};

use crate::error::{Reason, ValidationError};
use crate::key::{EntityKind, Keyed, UserKey};
use crate::validation::{is_valid_email, is_valid_phone, non_empty, required, same_key};

/// A registered user, identified by `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Keyed for User {
    type Key = UserKey;
    const KIND: EntityKind = EntityKind::User;

    fn key(&self) -> UserKey {
        UserKey::new(self.username.clone())
    }
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that is empty, or
    /// `phone`/`email` when they do not have the expected shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty(Self::KIND, "name", &self.name)?;
        non_empty(Self::KIND, "username", &self.username)?;
        non_empty(Self::KIND, "phone", &self.phone)?;
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::new(
                Self::KIND,
                "phone",
                Reason::Format("digits with an optional leading '+'"),
            ));
        }
        non_empty(Self::KIND, "email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new(
                Self::KIND,
                "email",
                Reason::Format("an address like local@domain.tld"),
            ));
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`], also used as the request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserBuilder {
    name: Option<String>,
    username: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Pin the payload to an existing key before an update.
    ///
    /// # Errors
    ///
    /// Returns [`Reason::KeyChanged`] on `username` if the payload names a
    /// different user.
    pub fn for_key(mut self, key: &UserKey) -> Result<Self, ValidationError> {
        same_key(User::KIND, "username", self.username.as_deref(), key.as_str())?;
        self.username = Some(key.to_string());
        Ok(self)
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a field is missing or invalid.
    pub fn build(self) -> Result<User, ValidationError> {
        let user = User {
            name: required(User::KIND, "name", self.name)?,
            username: required(User::KIND, "username", self.username)?,
            phone: required(User::KIND, "phone", self.phone)?,
            email: required(User::KIND, "email", self.email)?,
        };
        user.validate()?;
        Ok(user)
    }
}
