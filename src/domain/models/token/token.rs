//! JWT claims
//!
//! Registered claims (`iss`, `sub`, `iat`, `exp`) plus the principal's
//! username and comma separated authorities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Issuer
    pub iss: String,
    /// Subject, constant for every token
    pub sub: String,
    /// Authenticated username
    pub username: String,
    /// Comma separated granted authorities
    pub authorities: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl JwtClaims {
    pub fn authority_list(&self) -> Vec<String> {
        self.authorities
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }
}
