use actix_web::{get, web, HttpResponse};
use crate::domain::dto::customers::CustomerResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::state::AppState;

/// Login endpoint
///
/// Called with Basic credentials. The security chain authenticates the
/// request and attaches the JWT (`Authorization`) and CSRF token
/// (`X-XSRF-TOKEN`, `XSRF-TOKEN` cookie) to this response; the body is the
/// customer profile.
///
/// ```bash
/// curl -i http://localhost:8080/user -u happy@example.com:EazyBytes12
/// ```
#[get("/user")]
pub async fn get_user_details_after_login(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let customer = state.customer_service.find_by_email(&user.username).await?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}
