//! Identity store
//!
//! The authenticator talks to persistence through the [`IdentityStore`]
//! capability trait: lookup-by-username is the only contract it needs.
//! [`MemoryIdentityStore`] is the shipped implementation; a database-backed
//! store only has to implement the same trait.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;

use warden_types::Identity;

/// Identity store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or answered with a fault
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup-by-username capability over stored identities.
///
/// Usernames are unique, so at most one record comes back. Lookups may
/// suspend on I/O; implementations must not mutate identity state.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Find an identity by its unique username
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Identity>>;
}

/// In-memory identity store
///
/// Concurrent map keyed by username. Used for demo provisioning and as the
/// test collaborator.
#[derive(Default, Clone)]
pub struct MemoryIdentityStore {
    identities: Arc<DashMap<String, Identity>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) an identity record
    pub fn insert(&self, identity: Identity) {
        self.identities.insert(identity.username.clone(), identity);
    }

    /// Remove an identity by username, returning whether it existed
    pub fn remove(&self, username: &str) -> bool {
        self.identities.remove(username).is_some()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Identity>> {
        Ok(self.identities.get(username).map(|r| r.value().clone()))
    }
}
