//! Password hashing

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// One-way password encoding
pub trait PasswordEncoder: Send + Sync {
    /// Hashes a raw password.
    fn encode(&self, raw_password: &str) -> AppResult<String>;

    /// Verifies a raw password against a stored hash. Malformed hashes never
    /// match.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool;
}

/// bcrypt backed [`PasswordEncoder`]
#[derive(Debug, Clone)]
pub struct BCryptPasswordEncoder {
    cost: u32,
}

impl BCryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Uses the cost from [`PasswordConfig::bcrypt_cost`].
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordEncoder for BCryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(raw_password, self.cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        bcrypt::verify(raw_password, encoded_password).unwrap_or_else(|e| {
            log::warn!("Stored password hash could not be verified: {}", e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_match() {
        let encoder = BCryptPasswordEncoder::new(4);
        let hash = encoder.encode("EazyBytes12").unwrap();

        assert_ne!(hash, "EazyBytes12");
        assert!(hash.starts_with("$2"));
        assert!(encoder.matches("EazyBytes12", &hash));
        assert!(!encoder.matches("wrong-password", &hash));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let encoder = BCryptPasswordEncoder::new(4);
        assert!(!encoder.matches("EazyBytes12", "plain-text"));
    }

    #[test]
    fn test_each_encoding_is_salted() {
        let encoder = BCryptPasswordEncoder::new(4);
        let first = encoder.encode("EazyBytes12").unwrap();
        let second = encoder.encode("EazyBytes12").unwrap();

        assert_ne!(first, second);
    }
}
