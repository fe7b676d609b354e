pub mod access_rule;
pub mod authenticated_user;
pub mod basic_credentials;

pub use access_rule::AccessRule;
pub use authenticated_user::AuthenticatedUser;
pub use basic_credentials::BasicCredentials;
