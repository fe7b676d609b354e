//! # Public HTTP Handlers
//!
//! Endpoints open to anonymous clients. `/contact` and `/register` are also
//! exempt from CSRF verification so first-time visitors can post to them.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::customers::{ContactRequest, RegisterCustomerRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[get("/notices")]
pub async fn get_notices() -> HttpResponse {
    HttpResponse::Ok().body("Here are the notices details from the DB")
}

/// Accepts a customer inquiry
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed fields
#[post("/contact")]
pub async fn save_contact_inquiry(
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("Inquiry received: subject={}", payload.subject);
    Ok(HttpResponse::Ok().body("Inquiry details are saved to the DB"))
}

/// Registers a new customer
///
/// The password is stored as a bcrypt hash. Customers registered here
/// always get the `USER` role; a `role` field in the body is ignored.
///
/// # Request Body
///
/// ```json
/// {
///   "email": "happy@example.com",
///   "mobile_number": "5334122365",
///   "pwd": "EazyBytes12"
/// }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - validation failed
/// * `409 Conflict` - email already registered
#[post("/register")]
pub async fn register_customer(
    state: web::Data<AppState>,
    payload: web::Json<RegisterCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.customer_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().body("Given user details are successfully registered"))
}
