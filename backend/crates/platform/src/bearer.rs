//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>`. The scheme is matched
//! case-insensitively and the header must split into exactly two parts.

use http::HeaderMap;
use http::header::AUTHORIZATION;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the token from the `Authorization` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    parse_bearer(value)
}

/// Parse a raw header value
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}
