//! # Domain Layer
//!
//! Types shared by the security filters, services and handlers.
//!
//! ```text
//! domain/
//! ├── entities/   - stored records (Customer)
//! ├── dto/        - request/response bodies with validation rules
//! └── models/     - security models: authenticated principal, access rules,
//!                   JWT claims, CSRF token
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Customer, CustomerRole};
pub use dto::{ContactRequest, CustomerResponse, RegisterCustomerRequest};
pub use models::{AccessRule, AuthenticatedUser, BasicCredentials, CsrfToken, JwtClaims};
