//! User domain model.
//!
//! # Responsibility
//! - Hold one user's identity and contact data as a plain value.
//! - Describe field limits for storage schemas and validators.
//!
//! # Invariants
//! - `name`, `email` and `address` are always present (empty by default).
//! - Construction stores values verbatim; it never trims or validates.
//! - `display_label()` is always the `name` field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identity of a persisted user.
pub type UserId = i64;

pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 50;
pub const ADDRESS_MAX_CHARS: usize = 200;

/// Name and length bound of one `User` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable identifier used for storage columns and API fields.
    pub name: &'static str,
    /// Maximum length in characters (Unicode scalar values).
    pub max_chars: usize,
}

/// Validation failure for user field limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    FieldTooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldTooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "{field} has {actual_chars} characters; at most {max_chars} allowed"
            ),
        }
    }
}

impl Error for UserValidationError {}

/// A person registered in the user book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Free-form postal address.
    pub address: String,
}

impl User {
    /// Field metadata in declaration order.
    pub const FIELDS: [FieldSpec; 3] = [
        FieldSpec {
            name: "name",
            max_chars: NAME_MAX_CHARS,
        },
        FieldSpec {
            name: "email",
            max_chars: EMAIL_MAX_CHARS,
        },
        FieldSpec {
            name: "address",
            max_chars: ADDRESS_MAX_CHARS,
        },
    ];

    /// Creates a user holding the given values unchanged.
    ///
    /// Length limits are not checked here; see [`User::validate`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Human-readable label for logs and listings. Always the `name` field.
    pub fn display_label(&self) -> &str {
        &self.name
    }

    /// Checks every field against its declared maximum length.
    ///
    /// Returns the first violation in field declaration order.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        for (spec, value) in Self::FIELDS.iter().zip(self.field_values()) {
            let actual_chars = value.chars().count();
            if actual_chars > spec.max_chars {
                return Err(UserValidationError::FieldTooLong {
                    field: spec.name,
                    max_chars: spec.max_chars,
                    actual_chars,
                });
            }
        }
        Ok(())
    }

    fn field_values(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.address]
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_label())
    }
}

/// A user together with the identity assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    #[serde(flatten)]
    pub user: User,
}

impl Display for StoredUser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.user, f)
    }
}
