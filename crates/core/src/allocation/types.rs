//! Allocation data types.

/// A chosen pack size and how many packs of that size to ship.
///
/// Allocations returned by the calculator always have `count >= 1` and
/// distinct sizes, sorted by size descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackAllocation {
    /// Number of items in this pack.
    pub size: i64,
    /// Number of packs of this size.
    pub count: i64,
}
