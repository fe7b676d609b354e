//! Bank customer record
//!
//! A customer owns a bcrypt password hash and the granted authorities used by
//! the role rules (`ROLE_USER`, `ROLE_ADMIN`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::auth::AuthenticatedUser;

/// Role assigned at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerRole {
    #[default]
    User,
    Admin,
}

impl CustomerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerRole::User => "USER",
            CustomerRole::Admin => "ADMIN",
        }
    }

    /// Granted authority name, prefixed the way role rules expect it.
    pub fn authority(&self) -> String {
        format!("{}{}", AuthenticatedUser::ROLE_PREFIX, self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub mobile_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: CustomerRole,
    pub authorities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(email: String, mobile_number: String, password_hash: String, role: CustomerRole) -> Self {
        Self {
            id: None,
            email,
            mobile_number,
            password_hash,
            authorities: vec![role.authority()],
            role,
            created_at: Utc::now(),
        }
    }

    /// Principal stored in the security exchange after a successful login.
    pub fn to_authenticated_user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            username: self.email.clone(),
            authorities: self.authorities.clone(),
        }
    }
}
