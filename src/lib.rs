//! Permutrix - A library for enumerating permutations of finite collections
//!
//! This library enumerates arrangements under two regimes: exact permutations
//! (each input element used exactly once) and replacement tuples (fixed-width
//! tuples over an alphabet, repetition allowed, walked in odometer order).
//! A reversal deduplicator collapses each permutation and its mirror image
//! into one representative.

pub mod dedup;
pub mod permutations;
pub mod replacement;

// Re-export the main public API
pub use dedup::deduplicate_by_reversal;
pub use permutations::{iter_permutations, Permutations};
pub use replacement::{iter_replacement_tuples, Alphabet, ReplacementError, ReplacementTuples};

use std::hash::Hash;

/// Enumerate every permutation of `items`, then collapse mirror-image pairs,
/// keeping the first-seen representative of each.
///
/// This is a convenience wrapper around the enumerate-then-deduplicate
/// pipeline; it materializes the full batch, so it is only suitable for
/// small inputs (the batch holds `n!` permutations before deduplication).
///
/// # Examples
///
/// ```
/// use permutrix::unique_orderings;
///
/// let orderings = unique_orderings(vec![1, 2, 3]);
/// // 3! = 6 permutations collapse to 3 forward/backward pairs
/// assert_eq!(orderings.len(), 3);
/// ```
pub fn unique_orderings<T: Clone + Hash>(items: Vec<T>) -> Vec<Vec<T>> {
    deduplicate_by_reversal(iter_permutations(items).collect())
}
