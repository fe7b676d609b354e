use serde::Serialize;

/// Anti-forgery token resolved for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsrfToken {
    /// Response/request header carrying the token
    pub header_name: String,
    /// Query parameter alternative to the header
    pub parameter_name: String,
    pub token: String,
    /// True when the token was minted for this request and still has to be
    /// written back as a cookie.
    #[serde(skip)]
    pub is_new: bool,
}
