//! Configuration types for the auth core

use std::time::Duration;

use crate::AuthError;

/// Auth core configuration
///
/// Holds the process-wide symmetric signing key and token lifetime. Built
/// once at startup and passed by constructor parameter; the key is never
/// regenerated per request, so any process holding the same key verifies
/// tokens issued elsewhere.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA512 signing secret
    pub(crate) signing_secret: Vec<u8>,
    /// Token time-to-live
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Minimum signing secret length in bytes (HS512 block size)
    pub const MIN_SECRET_LENGTH: usize = 64;

    /// Default token time-to-live: 8 hours
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(28_800);

    /// Create a new auth config, validating the secret length.
    ///
    /// # Errors
    /// Returns [`AuthError::Configuration`] if the secret is shorter than
    /// [`Self::MIN_SECRET_LENGTH`] bytes. This is startup-fatal: the process
    /// must not start with a weak signing key.
    pub fn try_new(signing_secret: impl AsRef<[u8]>) -> Result<Self, AuthError> {
        let secret = signing_secret.as_ref();
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "signing secret too short: got {} bytes, need at least {}",
                secret.len(),
                Self::MIN_SECRET_LENGTH
            )));
        }
        Ok(Self {
            signing_secret: secret.to_vec(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        })
    }

    /// Set the token time-to-live
    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material never appears in debug output
        f.debug_struct("AuthConfig")
            .field("secret_length", &self.signing_secret.len())
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
