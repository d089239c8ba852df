//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PreregError`]
//! via `#[from]` or the storage adapter's wrapper type.

/// Top-level error type returned by the application services.
#[derive(Debug, thiserror::Error)]
pub enum PreregError {
    /// A request carried invalid parameters.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A create collided with an existing unique triple.
    #[error("future device conflict")]
    Conflict(#[from] ConflictError),

    /// The storage layer failed; the source carries the detail.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Duplicate unique-key insertion attempt.
///
/// The message names the exact values that collided so operators can find the
/// offending record without consulting the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "combination with serial number {serial_number}, product id {product_id} \
     and customer id {customer_id} already exists"
)]
pub struct ConflictError {
    /// Serial number of the rejected record.
    pub serial_number: String,
    /// Product id of the rejected record.
    pub product_id: String,
    /// Customer id of the rejected record.
    pub customer_id: i64,
}

/// Invalid request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The requested page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
