//! JWT Codec
//!
//! HS256 signing and verification over any serde claim type. One codec
//! holds one secret and one lifetime; access and refresh tokens each get
//! their own codec.
//!
//! Expiry is exact: leeway is fixed at zero and `exp` is a required claim.

use std::time::Duration;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("JWT secret must not be empty")]
    EmptySecret,

    #[error("Token has expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// `iat` / `exp` pair in seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWindow {
    pub issued_at: u64,
    pub expires_at: u64,
}

/// HS256 signer/verifier bound to one secret and one lifetime
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: exact_validation(),
            ttl,
        })
    }

    /// Codec with a fresh 32-byte random secret (development and tests)
    pub fn with_random_secret(ttl: Duration) -> Self {
        let secret = crate::crypto::random_bytes(32);
        Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
            validation: exact_validation(),
            ttl,
        }
    }

    /// Window for a token issued now
    pub fn window(&self) -> TokenWindow {
        let now = jsonwebtoken::get_current_timestamp();
        TokenWindow {
            issued_at: now,
            expires_at: now.saturating_add(self.ttl.as_secs()),
        }
    }

    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }

    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, JwtError> {
        decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => JwtError::Expired,
                JwtErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            })
    }
}

fn exact_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);
    validation
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
