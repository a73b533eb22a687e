//! Reversal deduplication: collapse each permutation and its mirror image
//! into a single representative.

mod core;

pub use core::deduplicate_by_reversal;
