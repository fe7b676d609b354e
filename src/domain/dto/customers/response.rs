use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::customers::{Customer, CustomerRole};

/// Customer details returned by `/user` (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Option<i64>,
    pub email: String,
    pub mobile_number: String,
    pub role: CustomerRole,
    pub authorities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            email: customer.email,
            mobile_number: customer.mobile_number,
            role: customer.role,
            authorities: customer.authorities,
            created_at: customer.created_at,
        }
    }
}
