use actix_web::dev::ServiceRequest;
use async_trait::async_trait;
use crate::domain::models::auth::BasicCredentials;
use crate::errors::{AppError, AppResult};
use crate::middlewares::filters::authorization_header;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};

/// Rejects Basic logins whose username contains `test`, before any
/// credential check runs.
#[derive(Debug, Default)]
pub struct RequestValidationFilter;

impl RequestValidationFilter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SecurityFilter for RequestValidationFilter {
    fn name(&self) -> &'static str {
        "RequestValidationFilter"
    }

    async fn do_filter(&self, req: &ServiceRequest, _exchange: &mut SecurityExchange) -> AppResult<()> {
        let Some(header) = authorization_header(req) else {
            return Ok(());
        };

        if let Some(credentials) = BasicCredentials::from_header(header)? {
            if credentials.username.to_lowercase().contains("test") {
                log::info!("Rejected login attempt with a test account");
                return Err(AppError::ValidationError(
                    "Test accounts are not allowed to log in".to_string(),
                ));
            }
        }

        Ok(())
    }
}
