//! Allocation engine implementing the two-level pack optimization.
//!
//! The calculation runs in three stages:
//!
//! 1. Normalize the configured pack sizes (reject non-positive, dedupe,
//!    sort ascending).
//! 2. Find the minimal shipped total `>= quantity` that is representable as
//!    a non-negative combination of the sizes, via Dijkstra over residues
//!    modulo the smallest pack size.
//! 3. Reconstruct the fewest-packs combination summing exactly to that
//!    total with a forward DP, breaking ties toward larger packs.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use super::error::AllocationError;
use super::types::PackAllocation;

/// Upper bound on the accepted order quantity.
pub const MAX_QUANTITY: i64 = 50_000_000;

/// Narrow calculation capability over which the real engine and test fakes
/// are interchangeable.
pub trait Calculator: Send + Sync {
    /// Returns a pack allocation that fulfills `quantity` using whole packs,
    /// minimizing first the total items shipped and then the number of packs.
    ///
    /// The returned list is sorted by size descending and contains only
    /// entries with `count >= 1`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-domain inputs, or
    /// [`AllocationError::Internal`] if a post-validation invariant breaks.
    fn calculate(
        &self,
        quantity: i64,
        sizes: &[i64],
    ) -> Result<Vec<PackAllocation>, AllocationError>;
}

/// Engine computing optimal pack allocations.
///
/// The engine is stateless; a single instance can be shared freely across
/// threads and calls.
pub struct AllocationEngine;

impl AllocationEngine {
    /// Creates a new allocation engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the optimal allocation for `quantity` over `sizes`.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::InvalidQuantity`] if `quantity <= 0`
    /// - [`AllocationError::QuantityTooLarge`] if `quantity > MAX_QUANTITY`
    /// - [`AllocationError::NoPackSizes`] if `sizes` is empty
    /// - [`AllocationError::InvalidPackSizes`] if any size is `<= 0`
    pub fn calculate(
        &self,
        quantity: i64,
        sizes: &[i64],
    ) -> Result<Vec<PackAllocation>, AllocationError> {
        if quantity <= 0 {
            return Err(AllocationError::InvalidQuantity);
        }
        if quantity > MAX_QUANTITY {
            return Err(AllocationError::QuantityTooLarge);
        }

        let sizes = Self::normalize_sizes(sizes)?;
        if sizes.is_empty() {
            return Err(AllocationError::NoPackSizes);
        }

        let shipped = Self::min_shipped_at_least(quantity, &sizes)?;
        let counts = Self::min_packs_for_exact(shipped, &sizes)?;

        Ok(counts
            .into_iter()
            .rev()
            .map(|(size, count)| PackAllocation { size, count })
            .collect())
    }

    /// Validates and canonicalizes a pack-size list: rejects non-positive
    /// sizes, drops duplicates, and sorts ascending.
    pub(crate) fn normalize_sizes(sizes: &[i64]) -> Result<Vec<i64>, AllocationError> {
        if sizes.iter().any(|&s| s <= 0) {
            return Err(AllocationError::InvalidPackSizes);
        }
        let mut out = sizes.to_vec();
        out.sort_unstable();
        out.dedup();
        Ok(out)
    }

    /// Finds the minimal shipped total `>= quantity` representable as a
    /// non-negative combination of `sizes` (ascending, deduped).
    ///
    /// Dijkstra over residues modulo the smallest size: `dist[r]` is the
    /// minimal combination sum congruent to `r`. Every representable sum is
    /// `dist[r] + k * m` for some residue, so lifting each finite `dist[r]`
    /// to the first value `>= quantity` and taking the minimum covers all
    /// candidates.
    pub(crate) fn min_shipped_at_least(
        quantity: i64,
        sizes: &[i64],
    ) -> Result<i64, AllocationError> {
        let m = sizes[0] as usize;

        let mut dist = vec![i64::MAX; m];
        dist[0] = 0;

        let mut heap: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();
        heap.push(Reverse((0, 0)));

        while let Some(Reverse((sum, res))) = heap.pop() {
            // Stale entry: the residue was relaxed after this was pushed.
            if sum != dist[res] {
                continue;
            }
            for &s in sizes {
                let next = (res + s as usize) % m;
                let next_sum = sum + s;
                if next_sum < dist[next] {
                    dist[next] = next_sum;
                    heap.push(Reverse((next_sum, next)));
                }
            }
        }

        let mut best = i64::MAX;
        for &d in &dist {
            if d == i64::MAX {
                continue;
            }
            let cand = if d >= quantity {
                d
            } else {
                let need = quantity - d;
                let lifts = (need + m as i64 - 1) / m as i64;
                d + lifts * m as i64
            };
            best = best.min(cand);
        }

        if best == i64::MAX {
            // Residue 0 always has distance 0, so this cannot fire for a
            // non-empty size set.
            return Err(AllocationError::Internal(
                "no representable shipped total".to_string(),
            ));
        }
        Ok(best)
    }

    /// Computes the fewest-packs combination summing exactly to `target`,
    /// returned as size -> count.
    ///
    /// Forward DP over totals with back-pointers. Sizes are tried largest
    /// first and ties on pack count settle on the larger incoming size, so
    /// reconstruction is deterministic and biased toward fewer, larger packs.
    pub(crate) fn min_packs_for_exact(
        target: i64,
        sizes: &[i64],
    ) -> Result<BTreeMap<i64, i64>, AllocationError> {
        let t = target as usize;

        let mut dp = vec![i64::MAX; t + 1];
        let mut prev_idx = vec![usize::MAX; t + 1];
        let mut prev_size = vec![0i64; t + 1];
        dp[0] = 0;

        let mut desc = sizes.to_vec();
        desc.sort_unstable_by(|a, b| b.cmp(a));

        for i in 0..=t {
            if dp[i] == i64::MAX {
                continue;
            }
            for &s in &desc {
                let j = i + s as usize;
                if j > t {
                    continue;
                }
                let cand = dp[i] + 1;
                if cand < dp[j] || (cand == dp[j] && s > prev_size[j]) {
                    dp[j] = cand;
                    prev_idx[j] = i;
                    prev_size[j] = s;
                }
            }
        }

        if dp[t] == i64::MAX {
            return Err(AllocationError::Internal(format!(
                "no exact combination for {target}"
            )));
        }

        let mut counts = BTreeMap::new();
        let mut cur = t;
        while cur > 0 {
            let s = prev_size[cur];
            let prev = prev_idx[cur];
            if s == 0 || prev == usize::MAX {
                return Err(AllocationError::Internal(format!(
                    "failed to reconstruct combination for {target}"
                )));
            }
            *counts.entry(s).or_insert(0) += 1;
            cur = prev;
        }
        Ok(counts)
    }
}

impl Calculator for AllocationEngine {
    fn calculate(
        &self,
        quantity: i64,
        sizes: &[i64],
    ) -> Result<Vec<PackAllocation>, AllocationError> {
        Self::calculate(self, quantity, sizes)
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
