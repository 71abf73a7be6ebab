//! User Name Value Object
//!
//! The user name is the login handle and the primary key shared by the
//! credential and profile tables. It is also what lands in every
//! `createBy` / `updateBy` audit column.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to 50 characters
//! - No whitespace or control characters inside
//! - Case is preserved (lookups are exact)

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AppError::bad_request("User name is required"));
        }
        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::bad_request(
                "User name must not contain spaces or control characters",
            ));
        }

        Ok(Self(name.to_owned()))
    }

    /// Stored values were validated on the way in
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
