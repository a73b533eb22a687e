//! Exact permutation enumeration: every arrangement of the input, each
//! element used exactly once.

mod core;

pub use core::{iter_permutations, Permutations};
