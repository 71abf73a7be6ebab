//! Profile Entity
//!
//! Extended, mutable user record. One-to-one with [`super::credential::Credential`]
//! through the user name. The role lives here, so the authenticated identity
//! is always read from the profile.

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub user_name: UserName,
    pub name: String,
    pub address: String,
    pub email: Option<Email>,
    pub phone_number: String,
    /// Stored media path
    pub avatar: String,
    pub note: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub create_date: DateTime<Utc>,
    pub create_by: String,
    pub update_date: DateTime<Utc>,
    pub update_by: String,
}

/// Validated fields for a new profile
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_name: UserName,
    pub name: String,
    pub address: String,
    pub email: Option<Email>,
    pub phone_number: String,
    pub note: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<Email>,
    pub phone_number: Option<String>,
    pub note: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

impl Profile {
    pub fn new(fields: NewProfile, avatar: String, creator: &str) -> Self {
        let now = Utc::now();
        Self {
            id: ProfileId::new(),
            user_name: fields.user_name,
            name: fields.name,
            address: fields.address,
            email: fields.email,
            phone_number: fields.phone_number,
            avatar,
            note: fields.note,
            role: fields.role,
            is_active: fields.is_active,
            create_date: now,
            create_by: creator.to_owned(),
            update_date: now,
            update_by: creator.to_owned(),
        }
    }

    pub fn apply(&mut self, patch: ProfilePatch, updater: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(note) = patch.note {
            self.note = Some(note);
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.update_date = Utc::now();
        self.update_by = updater.to_owned();
    }
}
