pub mod request;
pub mod response;

pub use request::{ContactRequest, RegisterCustomerRequest};
pub use response::CustomerResponse;
