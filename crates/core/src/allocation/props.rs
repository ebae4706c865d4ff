//! Property tests for the allocation engine.
//!
//! Each property cross-checks the engine against a brute-force oracle on
//! small inputs, or asserts an invariant that must hold for every accepted
//! input.

use proptest::prelude::*;

use super::engine::AllocationEngine;
use super::types::PackAllocation;

/// Strategy for small, valid pack-size lists (duplicates allowed).
fn sizes_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=30, 1..=4)
}

/// Strategy for small order quantities.
fn quantity_strategy() -> impl Strategy<Value = i64> {
    1i64..=200
}

fn shipped_total(alloc: &[PackAllocation]) -> i64 {
    alloc.iter().map(|a| a.size * a.count).sum()
}

fn pack_count(alloc: &[PackAllocation]) -> i64 {
    alloc.iter().map(|a| a.count).sum()
}

/// Smallest representable sum `>= quantity`, by reachability sweep.
///
/// The optimum is always below `quantity + max(size)`: removing any pack
/// from a combination at or above that bound still leaves at least
/// `quantity` items.
fn oracle_min_shipped(quantity: i64, sizes: &[i64]) -> Option<i64> {
    let max_size = *sizes.iter().max()?;
    let limit = (quantity + max_size) as usize;

    let mut reachable = vec![false; limit + 1];
    reachable[0] = true;
    for i in 0..=limit {
        if !reachable[i] {
            continue;
        }
        for &s in sizes {
            let j = i + s as usize;
            if j <= limit {
                reachable[j] = true;
            }
        }
    }

    (quantity as usize..=limit)
        .find(|&i| reachable[i])
        .map(|i| i as i64)
}

/// Minimum number of packs summing exactly to `target`, by plain DP.
fn oracle_min_packs(target: i64, sizes: &[i64]) -> Option<i64> {
    let t = target as usize;
    let mut dp = vec![i64::MAX; t + 1];
    dp[0] = 0;
    for i in 0..=t {
        if dp[i] == i64::MAX {
            continue;
        }
        for &s in sizes {
            let j = i + s as usize;
            if j <= t && dp[i] + 1 < dp[j] {
                dp[j] = dp[i] + 1;
            }
        }
    }
    if dp[t] == i64::MAX {
        None
    } else {
        Some(dp[t])
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any accepted input, the allocation is well-formed: it covers the
    /// quantity, uses only supplied sizes, lists each size once in strictly
    /// descending order, and has no zero counts.
    #[test]
    fn prop_allocation_well_formed(
        quantity in quantity_strategy(),
        sizes in sizes_strategy(),
    ) {
        let engine = AllocationEngine::new();
        let alloc = engine.calculate(quantity, &sizes).unwrap();

        prop_assert!(shipped_total(&alloc) >= quantity);
        prop_assert!(alloc.iter().all(|a| a.count >= 1));
        prop_assert!(alloc.iter().all(|a| sizes.contains(&a.size)));
        prop_assert!(alloc.windows(2).all(|w| w[0].size > w[1].size));
    }

    /// The shipped total is the minimal representable sum at or above the
    /// requested quantity.
    #[test]
    fn prop_shipped_total_is_minimal(
        quantity in quantity_strategy(),
        sizes in sizes_strategy(),
    ) {
        let engine = AllocationEngine::new();
        let alloc = engine.calculate(quantity, &sizes).unwrap();

        let expected = oracle_min_shipped(quantity, &sizes);
        prop_assert_eq!(Some(shipped_total(&alloc)), expected);
    }

    /// Among all combinations reaching the chosen shipped total, the
    /// allocation uses the fewest packs.
    #[test]
    fn prop_pack_count_is_minimal_for_shipped_total(
        quantity in quantity_strategy(),
        sizes in sizes_strategy(),
    ) {
        let engine = AllocationEngine::new();
        let alloc = engine.calculate(quantity, &sizes).unwrap();

        let expected = oracle_min_packs(shipped_total(&alloc), &sizes);
        prop_assert_eq!(Some(pack_count(&alloc)), expected);
    }

    /// Permuting or duplicating the size list does not change the result.
    #[test]
    fn prop_dedup_and_order_invariance(
        quantity in quantity_strategy(),
        sizes in sizes_strategy(),
    ) {
        let engine = AllocationEngine::new();
        let baseline = engine.calculate(quantity, &sizes).unwrap();

        let mut shuffled: Vec<i64> = sizes.iter().rev().copied().collect();
        shuffled.extend_from_slice(&sizes);
        let doubled = engine.calculate(quantity, &shuffled).unwrap();

        prop_assert_eq!(baseline, doubled);
    }

    /// Scaling the quantity and every size by the same factor scales the
    /// shipped total and leaves the per-size counts unchanged.
    #[test]
    fn prop_scale_equivariance(
        quantity in quantity_strategy(),
        sizes in sizes_strategy(),
        factor in 1i64..=5,
    ) {
        let engine = AllocationEngine::new();
        let base = engine.calculate(quantity, &sizes).unwrap();

        let scaled_sizes: Vec<i64> = sizes.iter().map(|s| s * factor).collect();
        let scaled = engine.calculate(quantity * factor, &scaled_sizes).unwrap();

        prop_assert_eq!(shipped_total(&scaled), shipped_total(&base) * factor);

        let scaled_back: Vec<PackAllocation> = scaled
            .iter()
            .map(|a| PackAllocation { size: a.size / factor, count: a.count })
            .collect();
        prop_assert_eq!(scaled_back, base);
    }
}
