//! 애플리케이션 공유 상태
//!
//! 시작 시 한 번 생성되어 각 워커에 `web::Data<AppState>`로 복제되며,
//! 서비스가 필요한 보안 필터에 전달됩니다.

use std::sync::Arc;
use crate::config::SecurityConfig;
use crate::middlewares::SecurityFilterChain;
use crate::repositories::customers::{CustomerRepository, InMemoryCustomerRepository};
use crate::services::auth::{BCryptPasswordEncoder, CookieCsrfTokenRepository, PasswordEncoder, TokenService};
use crate::services::customers::CustomerService;

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub token_service: Arc<TokenService>,
    pub csrf_repository: Arc<CookieCsrfTokenRepository>,
    pub security_config: Arc<SecurityConfig>,
}

impl AppState {
    pub fn new(
        customer_service: Arc<CustomerService>,
        token_service: Arc<TokenService>,
        security_config: SecurityConfig,
    ) -> Self {
        Self {
            customer_service,
            token_service,
            csrf_repository: Arc::new(CookieCsrfTokenRepository::new(security_config.csrf.clone())),
            security_config: Arc::new(security_config),
        }
    }

    /// Wires the default services from environment configuration.
    pub fn from_env() -> Self {
        let repository: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
        let encoder = BCryptPasswordEncoder::from_config();
        log::info!("bcrypt cost: {}", encoder.cost());
        let encoder: Arc<dyn PasswordEncoder> = Arc::new(encoder);

        Self::new(
            Arc::new(CustomerService::new(repository, encoder)),
            Arc::new(TokenService::from_config()),
            SecurityConfig::from_env(),
        )
    }

    pub fn security_filter_chain(&self) -> SecurityFilterChain {
        self.security_config.security_filter_chain(self)
    }
}
