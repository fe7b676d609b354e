//! HTTP Basic credentials (RFC 7617)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::errors::{AppError, AppResult};

const BASIC_SCHEME: &str = "basic ";

/// Username/password pair decoded from an `Authorization: Basic` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// True when the header uses the Basic scheme (case-insensitive).
    pub fn is_basic(header: &str) -> bool {
        let header = header.trim_start();
        header.len() >= BASIC_SCHEME.len()
            && header.is_char_boundary(BASIC_SCHEME.len())
            && header[..BASIC_SCHEME.len()].eq_ignore_ascii_case(BASIC_SCHEME)
    }

    /// Decodes the header.
    ///
    /// Returns `Ok(None)` for other schemes so callers can skip the request.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - the payload is not valid base64,
    ///   not UTF-8, or has no `:` separator
    pub fn from_header(header: &str) -> AppResult<Option<Self>> {
        if !Self::is_basic(header) {
            return Ok(None);
        }

        let encoded = header.trim_start()[BASIC_SCHEME.len()..].trim();
        let decoded = STANDARD
            .decode(encoded.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| {
                AppError::AuthenticationError("Failed to decode basic authentication token".to_string())
            })?;

        let (username, password) = decoded.split_once(':').ok_or_else(|| {
            AppError::AuthenticationError("Invalid basic authentication token".to_string())
        })?;

        Ok(Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        }))
    }

    /// Encodes the pair back into a header value.
    pub fn to_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", self.username, self.password)))
    }
}
