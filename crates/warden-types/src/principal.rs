//! Per-request principal

use crate::role::Role;

/// The authenticated identity bound to a single request.
///
/// Constructed fresh by the authenticator from a valid token plus a fresh
/// identity lookup; roles come from storage, not from the token body.
/// Request-scoped: discarded when the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// The token subject.
    pub username: String,
    /// Roles granted at lookup time.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Create a new principal.
    #[must_use]
    pub fn new(username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// Check whether the principal holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether the principal holds any of the given roles.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let principal = Principal::new("user", vec![Role::User]);
        assert!(principal.has_role(Role::User));
        assert!(!principal.has_role(Role::Admin));
    }

    #[test]
    fn test_has_any_role() {
        let principal = Principal::new("admin", vec![Role::User, Role::Admin]);
        assert!(principal.has_any_role(&[Role::Admin]));
        assert!(principal.has_any_role(&[Role::User, Role::Admin]));

        let user_only = Principal::new("user", vec![Role::User]);
        assert!(!user_only.has_any_role(&[Role::Admin]));
        assert!(user_only.has_any_role(&[Role::User, Role::Admin]));
    }
}
