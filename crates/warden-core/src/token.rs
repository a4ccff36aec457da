//! Stateless JWT issuance and verification
//!
//! Tokens are signed HS512 with a process-wide symmetric key. Verification
//! is pure signature + expiry checking: no server-side session store, so any
//! process holding the key can authenticate any request.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use warden_types::Role;

use crate::{AuthConfig, AuthError};

/// Claims carried in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,
    /// Roles at issuance time. Informational only: the authenticator
    /// re-reads roles from the identity store on every request.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Check if the token is expired.
    ///
    /// A token presented exactly at its expiry instant is already expired.
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}

/// Token codec with a fixed signing key
///
/// The key is derived once from [`AuthConfig`] at construction and shared
/// read-only thereafter; no locking is required.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl TokenCodec {
    /// Create a new codec from validated configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        // Expiry is a hard boundary; no clock-skew grace
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.signing_secret),
            decoding_key: DecodingKey::from_secret(&config.signing_secret),
            validation,
            token_ttl: config.token_ttl,
        }
    }

    /// Issue a signed token for the given subject and roles
    pub fn issue(&self, subject: &str, roles: Vec<Role>) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: subject.to_string(),
            roles,
            iat: now,
            exp: now + self.token_ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("failed to sign token: {}", e);
            AuthError::Internal("failed to sign token".to_string())
        })
    }

    /// Decode and verify a presented token
    pub fn decode(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!("token rejected: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}
