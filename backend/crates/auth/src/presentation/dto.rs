//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::query::{ListQuery, parse_flag};
use platform::media::public_url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{ListProfilesInput, UpdateProfileInput};
use crate::domain::entity::profile::Profile;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Login / Refresh
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: ProfileResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile as returned to clients, avatar as an absolute URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_name: String,
    pub name: String,
    pub address: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub avatar: String,
    pub note: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub create_date: DateTime<Utc>,
    pub create_by: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

impl ProfileResponse {
    pub fn from_profile(profile: Profile, api_host: &str) -> Self {
        Self {
            id: profile.id.into_uuid(),
            avatar: public_url(api_host, &profile.avatar),
            user_name: profile.user_name.into_string(),
            name: profile.name,
            address: profile.address,
            email: profile.email.map(|e| e.as_str().to_owned()),
            phone_number: profile.phone_number,
            note: profile.note,
            role: profile.role,
            is_active: profile.is_active,
            create_date: profile.create_date,
            create_by: profile.create_by,
            update_date: profile.update_date,
            update_by: profile.update_by,
        }
    }
}

/// `isActive` in JSON bodies: `true`, `"1"`, `1` and friends
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            FlagValue::Number(1) => Some(true),
            FlagValue::Number(0) => Some(false),
            FlagValue::Number(_) => None,
            FlagValue::Text(s) => parse_flag(s),
        }
    }
}

/// Partial profile update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub note: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<FlagValue>,
}

impl UpdateProfileRequest {
    /// `None` when `isActive` is present but not a flag
    pub fn into_input(self) -> Option<UpdateProfileInput> {
        let is_active = match &self.is_active {
            Some(flag) => Some(flag.as_bool()?),
            None => None,
        };
        Some(UpdateProfileInput {
            name: self.name,
            address: self.address,
            email: self.email,
            phone_number: self.phone_number,
            note: self.note,
            role: self.role,
            is_active,
        })
    }
}

/// `GET /user` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(flatten)]
    pub common: ListQuery,
    pub keyword: Option<String>,
    pub role: Option<String>,
}

impl From<UserListQuery> for ListProfilesInput {
    fn from(query: UserListQuery) -> Self {
        Self {
            common: query.common,
            keyword: query.keyword,
            role: query.role,
        }
    }
}
