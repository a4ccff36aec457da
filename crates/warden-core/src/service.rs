//! Auth service - ties together token codec, credential checks, and lookup

use std::sync::Arc;

use warden_types::Principal;

use crate::{
    config::AuthConfig,
    password,
    store::IdentityStore,
    token::TokenCodec,
    AuthError,
};

/// Authentication service
///
/// Provides the two entry points of the auth core:
/// - [`login`](Self::login): credential check and token issuance
/// - [`authenticate`](Self::authenticate): bearer token to [`Principal`]
pub struct AuthService<S: IdentityStore> {
    codec: TokenCodec,
    store: Arc<S>,
    /// Hash verified when the username does not resolve, so unknown-user
    /// and wrong-password take equivalent time.
    dummy_hash: String,
}

impl<S: IdentityStore> AuthService<S> {
    /// Create a new auth service from validated configuration
    pub fn new(config: &AuthConfig, store: Arc<S>) -> Result<Self, AuthError> {
        let dummy_hash = password::hash_password("warden-dummy-credential")?;
        Ok(Self {
            codec: TokenCodec::new(config),
            store,
            dummy_hash,
        })
    }

    /// Access the token codec
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Verify a username/password pair and issue a signed token.
    ///
    /// Unknown user, wrong password, and disabled account all collapse into
    /// [`AuthError::InvalidCredentials`]: the response must not reveal which
    /// part of the credential was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let identity = self.store.find_by_username(username).await?;

        let identity = match identity {
            Some(identity) => identity,
            None => {
                // Burn the same hashing work as the match path
                password::verify_password(password, &self.dummy_hash);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !password::verify_password(password, &identity.password_hash) {
            tracing::debug!(username, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        if !identity.enabled {
            tracing::debug!(username, "login rejected for disabled identity");
            return Err(AuthError::InvalidCredentials);
        }

        self.codec.issue(&identity.username, identity.roles)
    }

    /// Authenticate a bearer token and produce the request principal.
    ///
    /// Decode and expiry-check the token, then resolve the subject against
    /// the store. Roles on the principal are the stored ones, not the token
    /// body's issuance-time claims. An unresolvable subject is a typed
    /// [`AuthError::UserNotFound`] denial, never a generic fault.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self.codec.decode(token)?;

        // Hard boundary: a token presented exactly at exp is denied
        if claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        let identity = self
            .store
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !identity.enabled {
            tracing::debug!(username = %claims.sub, "authenticated token for disabled identity");
            return Err(AuthError::UserDisabled);
        }

        Ok(Principal::new(identity.username, identity.roles))
    }
}

impl<S: IdentityStore> std::fmt::Debug for AuthService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
