use crate::domain::models::auth::AuthenticatedUser;

/// Access requirement attached to a group of request paths
#[derive(Debug, Clone, PartialEq)]
pub enum AccessRule {
    /// Open to anonymous requests
    PermitAll,
    /// Any authenticated principal
    Authenticated,
    /// A single role (without the `ROLE_` prefix)
    HasRole(String),
    /// Any one of the listed roles (OR)
    HasAnyRole(Vec<String>),
    /// Never granted
    DenyAll,
}

impl AccessRule {
    pub fn has_role(role: &str) -> Self {
        AccessRule::HasRole(role.to_string())
    }

    pub fn has_any_role(roles: &[&str]) -> Self {
        AccessRule::HasAnyRole(roles.iter().map(|r| r.to_string()).collect())
    }

    /// Whether the principal (if any) satisfies this rule.
    pub fn is_granted(&self, user: Option<&AuthenticatedUser>) -> bool {
        match (self, user) {
            (AccessRule::PermitAll, _) => true,
            (AccessRule::DenyAll, _) => false,
            (_, None) => false,
            (AccessRule::Authenticated, Some(_)) => true,
            (AccessRule::HasRole(role), Some(user)) => user.has_role(role),
            (AccessRule::HasAnyRole(roles), Some(user)) => user.has_any_role(roles),
        }
    }
}
