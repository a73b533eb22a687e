use log::debug;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn sequence_hash<'a, T: Hash + 'a>(items: impl Iterator<Item = &'a T>) -> u64 {
    let mut hasher = DefaultHasher::new();
    for item in items {
        item.hash(&mut hasher);
    }
    hasher.finish()
}

/// Unordered pairing key: a permutation and its reverse hash to the same
/// key no matter which is seen first.
fn reversal_key<T: Hash>(permutation: &[T]) -> (u64, u64) {
    let forward = sequence_hash(permutation.iter());
    let backward = sequence_hash(permutation.iter().rev());
    if forward <= backward {
        (forward, backward)
    } else {
        (backward, forward)
    }
}

/// Drop every permutation that is merely the reverse of one already kept,
/// leaving one representative per forward/backward pair.
///
/// The first permutation seen for each pair is kept, so the output order is
/// a subsequence of the input order. Palindromic permutations (equal to
/// their own reverse) are kept once. Classification is by hash pair, not
/// structural comparison, so two unrelated permutations whose hashes collide
/// would be merged; the probability is negligible for practical batch sizes
/// but this is not a guarantee against adversarial input.
pub fn deduplicate_by_reversal<T: Hash>(batch: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let input_len = batch.len();
    let mut seen = HashSet::new();

    let kept: Vec<Vec<T>> = batch
        .into_iter()
        .filter(|permutation| seen.insert(reversal_key(permutation)))
        .collect();

    debug!(
        "Reversal deduplication kept {} of {} permutations",
        kept.len(),
        input_len
    );
    kept
}
