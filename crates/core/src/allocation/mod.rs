//! Pack-allocation calculation.
//!
//! Given a requested item quantity and a set of whole-pack sizes, computes
//! the multiset of packs that fulfills the order while minimizing first the
//! total items shipped and then the number of packs used.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::{AllocationEngine, Calculator, MAX_QUANTITY};
pub use error::AllocationError;
pub use types::PackAllocation;
