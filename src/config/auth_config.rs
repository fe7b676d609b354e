//! Authentication related settings: JWT signing, CSRF token repository and
//! CORS policy.

use std::env;

/// JSON Web Token settings
///
/// Tokens are signed with HMAC-SHA256 using [`JwtConfig::secret`]. The
/// generated token is written to the `Authorization` response header of the
/// login endpoint and expected back, as is, on subsequent requests.
///
/// ## Environment variables
///
/// ```bash
/// export JWT_SECRET="jxgEQeXHuPq8VdbyYFNkANdudQ53YUn4"
/// export JWT_ISSUER="Eazy Bank"
/// export JWT_EXPIRATION_SECONDS="30000"
/// ```
pub struct JwtConfig;

impl JwtConfig {
    /// Header carrying the token in both directions.
    pub const HEADER: &'static str = "Authorization";

    /// Subject claim stamped on every issued token.
    pub const SUBJECT: &'static str = "JWT Token";

    /// HMAC signing key. Falls back to a development key with a warning.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "jxgEQeXHuPq8VdbyYFNkANdudQ53YUn4".to_string()
        })
    }

    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "Eazy Bank".to_string())
    }

    /// Token lifetime in seconds (default 30000, a little over eight hours).
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse()
            .unwrap_or(30000)
    }
}

/// Cookie based CSRF token repository settings
///
/// The cookie is readable from JavaScript (not HttpOnly) so a single page
/// application can copy it into the request header.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
    pub parameter_name: String,
    pub cookie_path: String,
    pub cookie_http_only: bool,
    /// Paths excluded from token verification.
    pub ignored_paths: Vec<String>,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "XSRF-TOKEN".to_string(),
            header_name: "X-XSRF-TOKEN".to_string(),
            parameter_name: "_csrf".to_string(),
            cookie_path: "/".to_string(),
            cookie_http_only: false,
            ignored_paths: vec!["/contact".to_string(), "/register".to_string()],
        }
    }
}

impl CsrfConfig {
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored_paths.iter().any(|ignored| ignored == path)
    }
}

/// Cross-origin policy applied to every route
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache duration in seconds.
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:4200".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            exposed_headers: vec![JwtConfig::HEADER.to_string()],
            allow_credentials: true,
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Overrides the allowed origins with the comma separated
    /// `CORS_ALLOWED_ORIGINS` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
            let parsed = split_list(&origins);
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        }

        config
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
