//! Bounded replacement enumeration: every ordered tuple of a fixed length
//! over a finite alphabet, repetition allowed, in odometer order.

mod alphabet;
mod core;
mod errors;
mod odometer;

pub use alphabet::Alphabet;
pub use core::{iter_replacement_tuples, ReplacementTuples};
pub use errors::ReplacementError;

#[cfg(test)]
mod tests;
