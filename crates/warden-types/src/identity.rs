//! Identity types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// Unique user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A stored identity record.
///
/// Owned by the persistence layer and read-only to the auth core: the
/// authenticator loads it once per request and never writes it back.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Unique identifier.
    pub id: UserId,
    /// Unique username, the token subject.
    pub username: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// Disabled identities authenticate to a 401 even with a valid token.
    pub enabled: bool,
    /// Granted roles, re-read from storage on every authenticated request.
    pub roles: Vec<Role>,
}

impl Identity {
    /// Check whether this identity holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
