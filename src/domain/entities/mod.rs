//! Stored records.

pub mod customers;

pub use customers::{Customer, CustomerRole};
