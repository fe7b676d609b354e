//! Data access layer.
//!
//! Customer storage sits behind the async [`customers::CustomerRepository`]
//! trait; the bundled implementation keeps records in memory.

pub mod customers;
