use serde::{Deserialize, Serialize};
use std::fmt;

/// Role stored on the profile and carried in token claims.
///
/// There is no hierarchy: a route lists every role it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserRole {
    #[default]
    User = 0,
    Client = 1,
    Admin = 2,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "user",
            Client => "client",
            Admin => "admin",
        }
    }

    #[inline]
    pub const fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(User),
            1 => Some(Client),
            2 => Some(Admin),
            _ => None,
        }
    }

    /// Case-insensitive parse of `user` / `client` / `admin`
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code.trim().to_ascii_lowercase().as_str() {
            "user" => Some(User),
            "client" => Some(Client),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
