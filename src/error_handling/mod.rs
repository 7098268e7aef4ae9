//! Error handling.
//!
//! Errors are split into:
//! - **Initialization errors**: logger or HTTP client setup failed
//! - **Audit errors**: a fetch or extraction failure that ends one audit call
//!
//! Field-level absence (a missing tag or attribute) is never an error; it is
//! represented as `None` or an empty string in the report itself.

mod types;

// Re-export public API
pub use types::{AuditError, InitializationError};
