//! Session Token Service
//!
//! Handles creation and validation of the signed session cookie that proves a
//! prior successful login.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Session lifetime: tokens expire 7 days after issuance
pub const SESSION_TTL_DAYS: i64 = 7;

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The single claim this tool needs: a login succeeded
    pub authenticated: bool,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
    /// Token issuer
    pub iss: String,
}

/// Session service for token operations
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    /// Create a new session service with the provided signing secret
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::default();
        validation.set_issuer(&["paismo-web"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a new session token, valid for [`SESSION_TTL_DAYS`]
    pub fn issue_token(&self) -> Result<String> {
        let now = Utc::now();
        let expiration = now + Duration::days(SESSION_TTL_DAYS);

        let claims = Claims {
            authenticated: true,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            iss: "paismo-web".to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to encode session token")
    }

    /// Validate and decode a session token
    pub fn validate_token(&self, token: &str) -> Result<TokenData<Claims>> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .context("Failed to validate session token")
    }

    /// Fail-closed validity check.
    ///
    /// Missing signature, wrong signature, malformed payload, wrong issuer and
    /// expiry all collapse to `false`; nothing escapes this boundary.
    pub fn verify(&self, token: &str) -> bool {
        match self.validate_token(token) {
            Ok(data) => data.claims.authenticated,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_roundtrip() {
        let service = SessionService::new("test_secret");

        let token = service.issue_token().unwrap();
        let claims = service.validate_token(&token).unwrap().claims;

        assert!(claims.authenticated);
        assert_eq!(claims.iss, "paismo-web");
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_DAYS * 24 * 60 * 60);
        assert!(service.verify(&token));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = SessionService::new("one_secret");
        let verifier = SessionService::new("another_secret");

        let token = issuer.issue_token().unwrap();
        assert!(!verifier.verify(&token));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = SessionService::new("test_secret");

        assert!(!service.verify(""));
        assert!(!service.verify("not.a.jwt"));
        assert!(!service.verify("eyJhbGciOiJIUzI1NiJ9.e30."));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = SessionService::new("test_secret");

        // Hand-roll a token that expired two hours ago (past any leeway)
        let now = Utc::now();
        let claims = Claims {
            authenticated: true,
            iat: (now - Duration::days(8)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
            iss: "paismo-web".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        assert!(!service.verify(&token));
    }

    #[test]
    fn test_verify_rejects_wrong_issuer() {
        let service = SessionService::new("test_secret");

        let now = Utc::now();
        let claims = Claims {
            authenticated: true,
            iat: now.timestamp(),
            exp: (now + Duration::days(1)).timestamp(),
            iss: "someone-else".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        assert!(!service.verify(&token));
    }
}
