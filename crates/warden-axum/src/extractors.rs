//! Axum extractors for the request principal.
//!
//! The access filter binds the authenticated [`Principal`] into request
//! extensions; these extractors give handlers typed access to it.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use warden_types::Principal;

use crate::error::Rejection;

/// Extension key for the principal bound by [`AuthLayer`].
///
/// [`AuthLayer`]: crate::layer::AuthLayer
#[derive(Debug, Clone)]
pub struct PrincipalExt(pub Principal);

/// Extractor that requires an authenticated principal.
///
/// Rejects with a bare 401 if the layer bound none. Routes gated by the
/// policy never see that rejection in practice; this is the belt to the
/// policy's suspenders for handlers mounted outside a protected path.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

impl Deref for AuthPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthPrincipal
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PrincipalExt>()
            .cloned()
            .map(|ext| Self(ext.0))
            .ok_or(Rejection::Unauthenticated)
    }
}

/// Extractor for an optional principal.
///
/// Yields `None` instead of rejecting when the request is unauthenticated.
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

impl Deref for MaybePrincipal {
    type Target = Option<Principal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for MaybePrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<PrincipalExt>()
            .cloned()
            .map(|ext| ext.0);
        Ok(Self(principal))
    }
}
