//! Request and response bodies.

pub mod customers;

pub use customers::{ContactRequest, CustomerResponse, RegisterCustomerRequest};
