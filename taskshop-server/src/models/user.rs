//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{text, ValidationError};

/// Maximum length for user names
const MAX_NAME_LEN: usize = 100;

/// Maximum length for email addresses
const MAX_EMAIL_LEN: usize = 100;

/// Persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Validated input for a user insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Create a new user input.
    ///
    /// Fields are stored as given; neither may be blank or longer than
    /// 100 characters.
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: text("name", name, MAX_NAME_LEN)?,
            email: text("email", email, MAX_EMAIL_LEN)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attach the id assigned by the store.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
