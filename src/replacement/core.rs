use log::{info, warn};

use super::alphabet::Alphabet;
use super::errors::ReplacementError;
use super::odometer;

/// Lazy enumerator over every length-`L` tuple drawn from an alphabet with
/// replacement.
///
/// Tuples come out in ascending mixed-radix order: the alphabet's first
/// symbol is digit 0 and its last is digit `size - 1`, the rightmost
/// position is the least significant digit. The first tuple is `L` copies of
/// the first symbol, the last is `L` copies of the last symbol, and the full
/// run covers all `size^L` combinations exactly once.
#[derive(Debug, Clone)]
pub struct ReplacementTuples<T> {
    alphabet: Alphabet<T>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone + PartialEq> ReplacementTuples<T> {
    /// Fails with [`ReplacementError`] if `length` is zero or the alphabet
    /// holds no symbols.
    pub fn new(alphabet: Alphabet<T>, length: usize) -> Result<Self, ReplacementError> {
        if length < 1 {
            warn!("Rejected tuple enumeration with length {}", length);
            return Err(ReplacementError::InvalidLength(length));
        }
        if alphabet.is_empty() {
            warn!("Rejected tuple enumeration over an empty alphabet");
            return Err(ReplacementError::EmptyAlphabet);
        }

        info!(
            "Initialized replacement enumerator: {} symbols, {} positions",
            alphabet.len(),
            length
        );

        Ok(Self {
            alphabet,
            digits: vec![0; length],
            exhausted: false,
        })
    }

    fn materialize(&self) -> Vec<T> {
        self.digits
            .iter()
            .filter_map(|&digit| self.alphabet.get(digit).cloned())
            .collect()
    }
}

impl<T: Clone + PartialEq> Iterator for ReplacementTuples<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tuple = self.materialize();
        // The all-last tuple is the inclusive terminator: once the counter
        // wraps, emit it and stop.
        self.exhausted = !odometer::advance(&mut self.digits, self.alphabet.len());
        Some(tuple)
    }
}

/// Enumerate every tuple of `length` positions over `alphabet` lazily, in
/// odometer order.
pub fn iter_replacement_tuples<T: Clone + PartialEq>(
    alphabet: Alphabet<T>,
    length: usize,
) -> Result<ReplacementTuples<T>, ReplacementError> {
    ReplacementTuples::new(alphabet, length)
}
