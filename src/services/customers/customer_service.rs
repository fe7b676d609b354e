//! Customer registration and credential verification
//!
//! bcrypt hashing is CPU bound, so both hashing and verification run on the
//! blocking thread pool via [`web::block`].

use std::sync::Arc;
use actix_web::web;
use crate::domain::dto::customers::RegisterCustomerRequest;
use crate::domain::entities::customers::Customer;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::customers::CustomerRepository;
use crate::services::auth::PasswordEncoder;

const BAD_CREDENTIALS: &str = "Bad credentials";

pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>, password_encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self {
            repository,
            password_encoder,
        }
    }

    /// Registers a new customer with a hashed password
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - the email is already registered
    /// * `AppError::InternalError` - hashing failed
    pub async fn register(&self, request: RegisterCustomerRequest) -> AppResult<Customer> {
        if self.repository.exists_by_email(&request.email).await? {
            return Err(AppError::ConflictError(format!(
                "Customer with email {} already exists",
                request.email
            )));
        }

        let encoder = self.password_encoder.clone();
        let raw_password = request.password;
        let password_hash = web::block(move || encoder.encode(&raw_password))
            .await
            .context("Password hashing task failed")??;

        let customer = Customer::new(request.email, request.mobile_number, password_hash, request.role);
        let saved = self.repository.save(customer).await?;

        log::info!("Customer registered: id={:?}, role={}", saved.id, saved.role.as_str());
        Ok(saved)
    }

    /// Checks email/password and returns the principal
    ///
    /// Unknown emails and wrong passwords fail identically.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - bad credentials
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                log::debug!("Authentication failed: unknown customer");
                AppError::AuthenticationError(BAD_CREDENTIALS.to_string())
            })?;

        let encoder = self.password_encoder.clone();
        let raw_password = password.to_string();
        let password_hash = customer.password_hash.clone();
        let matches = web::block(move || encoder.matches(&raw_password, &password_hash))
            .await
            .context("Password verification task failed")?;

        if !matches {
            log::debug!("Authentication failed: password mismatch for customer id={:?}", customer.id);
            return Err(AppError::AuthenticationError(BAD_CREDENTIALS.to_string()));
        }

        Ok(customer.to_authenticated_user())
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - no customer with this email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Customer> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::customers::CustomerRole;
    use crate::repositories::customers::InMemoryCustomerRepository;
    use crate::services::auth::BCryptPasswordEncoder;

    fn service() -> CustomerService {
        CustomerService::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(BCryptPasswordEncoder::new(4)),
        )
    }

    fn request(email: &str, role: CustomerRole) -> RegisterCustomerRequest {
        RegisterCustomerRequest {
            email: email.to_string(),
            mobile_number: "5334122365".to_string(),
            password: "EazyBytes12".to_string(),
            role,
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let service = service();
        let customer = service.register(request("happy@example.com", CustomerRole::User)).await.unwrap();

        assert_eq!(customer.id, Some(1));
        assert_ne!(customer.password_hash, "EazyBytes12");
        assert_eq!(customer.authorities, vec!["ROLE_USER"]);
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_email() {
        let service = service();
        service.register(request("happy@example.com", CustomerRole::User)).await.unwrap();

        let result = service.register(request("happy@example.com", CustomerRole::Admin)).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_authenticate() {
        let service = service();
        service.register(request("boss@example.com", CustomerRole::Admin)).await.unwrap();

        let user = service.authenticate("boss@example.com", "EazyBytes12").await.unwrap();
        assert_eq!(user.username, "boss@example.com");
        assert!(user.has_role("ADMIN"));

        assert!(matches!(
            service.authenticate("boss@example.com", "wrong").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.authenticate("nobody@example.com", "EazyBytes12").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_find_by_email_not_found() {
        assert!(matches!(
            service().find_by_email("nobody@example.com").await,
            Err(AppError::NotFound(_))
        ));
    }
}
