//! HTTP Basic authentication against the customer store

use std::sync::Arc;
use actix_web::dev::ServiceRequest;
use async_trait::async_trait;
use crate::domain::models::auth::BasicCredentials;
use crate::errors::AppResult;
use crate::middlewares::filters::authorization_header;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};
use crate::services::customers::CustomerService;

pub struct BasicAuthenticationFilter {
    customer_service: Arc<CustomerService>,
}

impl BasicAuthenticationFilter {
    pub fn new(customer_service: Arc<CustomerService>) -> Self {
        Self { customer_service }
    }
}

#[async_trait(?Send)]
impl SecurityFilter for BasicAuthenticationFilter {
    fn name(&self) -> &'static str {
        "BasicAuthenticationFilter"
    }

    /// Bad credentials end the chain with 401; other schemes pass through.
    async fn do_filter(&self, req: &ServiceRequest, exchange: &mut SecurityExchange) -> AppResult<()> {
        if exchange.is_authenticated() {
            return Ok(());
        }

        let Some(header) = authorization_header(req) else {
            return Ok(());
        };
        let Some(credentials) = BasicCredentials::from_header(header)? else {
            return Ok(());
        };

        let user = self
            .customer_service
            .authenticate(&credentials.username, &credentials.password)
            .await?;

        exchange.authentication = Some(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::test::TestRequest;
    use crate::domain::dto::customers::RegisterCustomerRequest;
    use crate::domain::entities::customers::CustomerRole;
    use crate::errors::AppError;
    use crate::repositories::customers::InMemoryCustomerRepository;
    use crate::services::auth::BCryptPasswordEncoder;

    async fn customer_service() -> Arc<CustomerService> {
        let service = CustomerService::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(BCryptPasswordEncoder::new(4)),
        );
        service
            .register(RegisterCustomerRequest {
                email: "happy@example.com".to_string(),
                mobile_number: "5334122365".to_string(),
                password: "EazyBytes12".to_string(),
                role: CustomerRole::User,
            })
            .await
            .unwrap();
        Arc::new(service)
    }

    fn request_with(username: &str, password: &str) -> ServiceRequest {
        let credentials = BasicCredentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        TestRequest::get()
            .uri("/user")
            .insert_header((header::AUTHORIZATION, credentials.to_header()))
            .to_srv_request()
    }

    #[actix_web::test]
    async fn test_valid_credentials_authenticate() {
        let filter = BasicAuthenticationFilter::new(customer_service().await);
        let mut exchange = SecurityExchange::default();

        filter
            .do_filter(&request_with("happy@example.com", "EazyBytes12"), &mut exchange)
            .await
            .unwrap();

        let user = exchange.authentication.unwrap();
        assert_eq!(user.username, "happy@example.com");
        assert!(user.has_role("USER"));
    }

    #[actix_web::test]
    async fn test_wrong_password_is_unauthorized() {
        let filter = BasicAuthenticationFilter::new(customer_service().await);
        let mut exchange = SecurityExchange::default();

        let result = filter
            .do_filter(&request_with("happy@example.com", "wrong-password"), &mut exchange)
            .await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        assert!(exchange.authentication.is_none());
    }

    #[actix_web::test]
    async fn test_requests_without_basic_header_pass() {
        let filter = BasicAuthenticationFilter::new(customer_service().await);
        let mut exchange = SecurityExchange::default();

        let req = TestRequest::get().uri("/notices").to_srv_request();
        filter.do_filter(&req, &mut exchange).await.unwrap();
        assert!(!exchange.is_authenticated());
    }
}
