//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - JWT signing and verification (HS256)
//! - `Authorization: Bearer` header parsing
//! - Local media storage for uploaded files
//! - Multipart upload form reading
//! - Random strings and duration parsing

pub mod bearer;
pub mod crypto;
pub mod duration;
pub mod jwt;
pub mod media;
pub mod password;
pub mod upload;
