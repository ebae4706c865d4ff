//! Allocation error types.

use thiserror::Error;

/// Allocation-related errors.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Requested quantity is zero or negative.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    /// Requested quantity is above the accepted upper bound.
    #[error("quantity exceeds the maximum of {}", super::MAX_QUANTITY)]
    QuantityTooLarge,

    /// No pack sizes were supplied.
    #[error("no pack sizes configured")]
    NoPackSizes,

    /// A supplied pack size is zero or negative.
    #[error("pack sizes must be positive")]
    InvalidPackSizes,

    /// A post-validation invariant was violated; indicates a bug.
    #[error("internal allocation failure: {0}")]
    Internal(String),
}
