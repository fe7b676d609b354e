//! Public request bodies for `/register` and `/contact`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::customers::CustomerRole;

/// Customer registration request
///
/// The password field is also accepted as `pwd`. `role` is never read from
/// the request body: self-registered customers are always `USER`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 7, max = 20, message = "Mobile number must be 7-20 characters"))]
    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,

    #[serde(alias = "pwd")]
    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(skip_deserializing)]
    pub role: CustomerRole,
}

fn validate_mobile_number(mobile_number: &str) -> Result<(), ValidationError> {
    let digits = mobile_number.strip_prefix('+').unwrap_or(mobile_number);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_mobile_number")
            .with_message("Mobile number may only contain digits".into()));
    }
    Ok(())
}

/// Contact inquiry left by a visitor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 50, message = "Contact name must be 1-50 characters"))]
    pub contact_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub contact_email: String,

    #[validate(length(min = 1, max = 500, message = "Subject must be 1-500 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}
