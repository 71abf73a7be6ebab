//! Entities

pub mod auth_user;
pub mod credential;
pub mod profile;
