//! JWT token service
//!
//! Issues the token handed out by the login endpoint and validates the token
//! presented on every other request. Tokens are HMAC-SHA256 signed and carry
//! the username and comma separated authorities.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::JwtClaims;
use crate::errors::{AppError, AppResult, ErrorContext};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT issuance and validation
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    issuer: String,
    expiration_seconds: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, expiration_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            expiration_seconds,
        }
    }

    /// Builds the service from [`JwtConfig`].
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::issuer(), JwtConfig::expiration_seconds())
    }

    /// Issues a signed token for an authenticated principal
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - signing failed
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let jwt = token_service.generate_token(&user)?;
    /// response.headers_mut().insert(AUTHORIZATION, HeaderValue::from_str(&jwt)?);
    /// ```
    pub fn generate_token(&self, user: &AuthenticatedUser) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.expiration_seconds);

        let claims = JwtClaims {
            iss: self.issuer.clone(),
            sub: JwtConfig::SUBJECT.to_string(),
            username: user.username.clone(),
            authorities: user.authorities_csv(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &JwtClaims) -> AppResult<String> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), claims, &encoding_key)
            .context("JWT generation failed")
    }

    /// Verifies signature, issuer and expiry and returns the principal
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - expired, tampered or malformed token
    pub fn validate_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        let claims = decode::<JwtClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError(format!("Invalid token: {}", e)),
            })?;

        Ok(AuthenticatedUser::new(claims.username.clone(), claims.authority_list()))
    }

    /// Strips an optional `Bearer ` prefix; raw tokens are returned as is.
    pub fn extract_token<'a>(&self, auth_header: &'a str) -> &'a str {
        let auth_header = auth_header.trim();
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .unwrap_or(auth_header)
    }
}
