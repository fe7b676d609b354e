use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// Principal established by the security filter chain
///
/// Populated either from a verified JWT or from HTTP Basic credentials and
/// stored in the request extensions before the handler runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Login name (the customer's email)
    pub username: String,

    /// Granted authorities, roles carry the `ROLE_` prefix
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    pub const ROLE_PREFIX: &'static str = "ROLE_";

    pub fn new(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    /// Checks a granted authority verbatim
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    /// Checks a role, accepting it with or without the `ROLE_` prefix
    pub fn has_role(&self, role: &str) -> bool {
        if role.starts_with(Self::ROLE_PREFIX) {
            self.has_authority(role)
        } else {
            self.has_authority(&format!("{}{}", Self::ROLE_PREFIX, role))
        }
    }

    /// True when any of the given roles is granted
    pub fn has_any_role(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    /// Comma separated authorities, the form carried inside the JWT.
    pub fn authorities_csv(&self) -> String {
        self.authorities.join(",")
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Full authentication is required to access this resource"
            ))),
        }
    }
}
