pub mod csrf_token;

pub use csrf_token::CsrfToken;
