//! Item Name Value Object
//!
//! Display name shared by categories, cake faces, options and sample assets.
//! Trimmed, non-empty, at most 50 characters (the column width).

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

pub const ITEM_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("name is required"));
        }
        if name.chars().count() > ITEM_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "name must be at most {} characters",
                ITEM_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name.to_owned()))
    }

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

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(ItemName::new("  Roses ").unwrap().as_str(), "Roses");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(ItemName::new("   ").is_err());
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(ItemName::new("é".repeat(50)).is_ok());
        assert!(ItemName::new("a".repeat(51)).is_err());
    }
}
