//! Credential Entity
//!
//! Login secret for one user name. Kept apart from the profile so that the
//! hash never travels with profile reads.

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::value_object::user_name::UserName;

#[derive(Debug, Clone)]
pub struct Credential {
    pub user_name: UserName,
    pub password_hash: HashedPassword,
}

impl Credential {
    pub fn new(user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            password_hash,
        }
    }

    /// Compare a submitted password against the stored hash
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.password_hash.verify(password, pepper)
    }
}
