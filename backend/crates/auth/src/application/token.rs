//! Token Service
//!
//! Issues and verifies the access/refresh pair. Both tokens carry the same
//! claim shape and differ only in secret and lifetime. Nothing is persisted.

use platform::jwt::{JwtCodec, JwtError};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// JWT claims of both token kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_name: String,
    pub role: UserRole,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenService<'a> {
    config: &'a AuthConfig,
}

impl<'a> TokenService<'a> {
    pub fn new(config: &'a AuthConfig) -> Self {
        Self { config }
    }

    pub fn issue_access_token(&self, user_name: &str, role: UserRole) -> AuthResult<String> {
        issue(&self.config.access_tokens, user_name, role)
    }

    pub fn issue_refresh_token(&self, user_name: &str, role: UserRole) -> AuthResult<String> {
        issue(&self.config.refresh_tokens, user_name, role)
    }

    pub fn issue_pair(&self, user_name: &str, role: UserRole) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_name, role)?,
            refresh_token: self.issue_refresh_token(user_name, role)?,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.config.access_tokens.decode(token)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.config.refresh_tokens.decode(token)
    }
}

fn issue(codec: &JwtCodec, user_name: &str, role: UserRole) -> AuthResult<String> {
    let window = codec.window();
    let claims = Claims {
        user_name: user_name.to_owned(),
        role,
        iat: window.issued_at,
        exp: window.expires_at,
    };
    codec
        .encode(&claims)
        .map_err(|e| AuthError::Token(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_roundtrip() {
        let config = AuthConfig::default();
        let tokens = TokenService::new(&config);
        let token = tokens.issue_access_token("alice", UserRole::Admin).unwrap();

        let claims = tokens.verify_access_token(&token).unwrap();
        assert_eq!(claims.user_name, "alice");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let config = AuthConfig::default();
        let tokens = TokenService::new(&config);
        let pair = tokens.issue_pair("alice", UserRole::User).unwrap();

        assert_eq!(
            tokens.verify_access_token(&pair.refresh_token),
            Err(JwtError::InvalidSignature)
        );
        assert_eq!(
            tokens.verify_refresh_token(&pair.access_token),
            Err(JwtError::InvalidSignature)
        );
        assert!(tokens.verify_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_claims_wire_format() {
        let claims = Claims {
            user_name: "alice".into(),
            role: UserRole::Client,
            iat: 1,
            exp: 2,
        };
        assert_eq!(
            serde_json::to_value(&claims).unwrap(),
            serde_json::json!({"userName": "alice", "role": "client", "iat": 1, "exp": 2})
        );
    }
}
