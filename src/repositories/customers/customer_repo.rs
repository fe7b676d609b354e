//! Customer repository

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use crate::domain::entities::customers::Customer;
use crate::errors::{AppError, AppResult};

/// Customer lookup and persistence
///
/// Emails are matched case-insensitively.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Stores a new customer and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - the email is already registered
    async fn save(&self, customer: Customer) -> AppResult<Customer>;
}

/// Process-local customer store
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
    next_id: AtomicI64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|_| AppError::InternalError("customer store lock poisoned".to_string()))?;

        Ok(customers.get(&Self::key(email)).cloned())
    }

    async fn save(&self, mut customer: Customer) -> AppResult<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| AppError::InternalError("customer store lock poisoned".to_string()))?;

        let key = Self::key(&customer.email);
        if customers.contains_key(&key) {
            return Err(AppError::ConflictError(format!(
                "Customer with email {} already exists",
                customer.email
            )));
        }

        customer.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        customers.insert(key, customer.clone());

        log::debug!("Customer stored: id={:?}", customer.id);
        Ok(customer)
    }
}
