//! Route policy and role gate
//!
//! Authorization is plain data: a table mapping route paths to the access
//! they require, evaluated centrally after the access filter has bound (or
//! failed to bind) a principal.

use axum::http::Method;

use warden_types::{Principal, Role};

/// An any-of requirement over role membership.
///
/// Roles are flat: `ADMIN` does not imply `USER`, so a route that should
/// admit both lists both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    any_of: Vec<Role>,
}

impl RoleRequirement {
    /// Require a single role
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self { any_of: vec![role] }
    }

    /// Require any of the given roles
    #[must_use]
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            any_of: roles.into_iter().collect(),
        }
    }

    /// Evaluate the requirement against a principal's granted roles
    #[must_use]
    pub fn allows(&self, principal: &Principal) -> bool {
        self.any_of.iter().any(|r| principal.has_role(*r))
    }

    /// Human-readable form for 403 diagnostics in logs
    pub fn describe(&self) -> String {
        self.any_of
            .iter()
            .map(Role::to_string)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Access level a route demands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No credential needed
    Public,
    /// Any authenticated principal
    Authenticated,
    /// Authenticated principal holding one of the listed roles
    Role(RoleRequirement),
}

/// Outcome of evaluating a request against the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Let the handler run
    Allow,
    /// No (valid) credential for a protected route: 401
    Unauthenticated,
    /// Principal bound but missing a required role: 403
    Forbidden,
}

/// The route-to-requirement table.
///
/// Pre-flight (`OPTIONS`) requests are always allowed. Routes without an
/// entry default to [`Access::Authenticated`], so forgetting to register a
/// new route fails closed rather than open.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: Vec<(String, Access)>,
}

impl RoutePolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit a path without any credential
    #[must_use]
    pub fn public(self, path: impl Into<String>) -> Self {
        self.rule(path, Access::Public)
    }

    /// Require a role expression on a path
    #[must_use]
    pub fn require(self, path: impl Into<String>, requirement: RoleRequirement) -> Self {
        self.rule(path, Access::Role(requirement))
    }

    /// Add an explicit rule
    #[must_use]
    pub fn rule(mut self, path: impl Into<String>, access: Access) -> Self {
        self.rules.push((path.into(), access));
        self
    }

    fn lookup(&self, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, access)| access)
            .unwrap_or(&Access::Authenticated)
    }

    /// Evaluate a request against the table.
    ///
    /// A `None` principal denies every non-public route; an authenticated
    /// principal missing a required role is forbidden, not unauthenticated.
    pub fn evaluate(
        &self,
        method: &Method,
        path: &str,
        principal: Option<&Principal>,
    ) -> Decision {
        if method == Method::OPTIONS {
            return Decision::Allow;
        }

        match self.lookup(path) {
            Access::Public => Decision::Allow,
            Access::Authenticated => match principal {
                Some(_) => Decision::Allow,
                None => Decision::Unauthenticated,
            },
            Access::Role(requirement) => match principal {
                None => Decision::Unauthenticated,
                Some(principal) if requirement.allows(principal) => Decision::Allow,
                Some(principal) => {
                    tracing::debug!(
                        username = %principal.username,
                        required = %requirement.describe(),
                        path,
                        "role requirement not met"
                    );
                    Decision::Forbidden
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Principal {
        Principal::new("user", vec![Role::User])
    }

    fn admin() -> Principal {
        Principal::new("admin", vec![Role::User, Role::Admin])
    }

    fn policy() -> RoutePolicy {
        RoutePolicy::new()
            .public("/login")
            .require("/secured/user", RoleRequirement::role(Role::User))
            .require("/secured/admin", RoleRequirement::role(Role::Admin))
            .require(
                "/secured/resource/user-or-admin",
                RoleRequirement::any_of([Role::User, Role::Admin]),
            )
    }

    #[test]
    fn test_public_route_without_principal() {
        let d = policy().evaluate(&Method::POST, "/login", None);
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn test_options_always_allowed() {
        let d = policy().evaluate(&Method::OPTIONS, "/secured/admin", None);
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn test_protected_route_without_principal_is_unauthenticated() {
        let d = policy().evaluate(&Method::GET, "/secured/user", None);
        assert_eq!(d, Decision::Unauthenticated);
    }

    #[test]
    fn test_admin_route_with_user_principal_is_forbidden() {
        let d = policy().evaluate(&Method::GET, "/secured/admin", Some(&user()));
        assert_eq!(d, Decision::Forbidden);
    }

    #[test]
    fn test_admin_route_with_admin_principal() {
        let d = policy().evaluate(&Method::GET, "/secured/admin", Some(&admin()));
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn test_any_of_admits_either_role() {
        let p = policy();
        let path = "/secured/resource/user-or-admin";
        assert_eq!(p.evaluate(&Method::GET, path, Some(&user())), Decision::Allow);
        assert_eq!(p.evaluate(&Method::GET, path, Some(&admin())), Decision::Allow);
        assert_eq!(p.evaluate(&Method::GET, path, None), Decision::Unauthenticated);
    }

    #[test]
    fn test_unlisted_route_fails_closed() {
        let p = policy();
        assert_eq!(
            p.evaluate(&Method::GET, "/not-registered", None),
            Decision::Unauthenticated
        );
        assert_eq!(
            p.evaluate(&Method::GET, "/not-registered", Some(&user())),
            Decision::Allow
        );
    }

    #[test]
    fn test_admin_does_not_imply_user_or_vice_versa() {
        // Flat roles: an ADMIN-only principal is forbidden on a USER route
        let admin_only = Principal::new("root", vec![Role::Admin]);
        let d = policy().evaluate(&Method::GET, "/secured/user", Some(&admin_only));
        assert_eq!(d, Decision::Forbidden);
    }
}
