use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws used by the whole pipeline.
///
/// Every draw advances the source's state, so the number and kind of draws
/// made per generation call is part of the reproducibility contract.
pub trait RandomSource {
	/// Draws an integer uniformly from `range` (inclusive on both ends).
	fn next_int(&mut self, range: RangeInclusive<u32>) -> u32;

	/// Draws an index uniformly from `0..len`.
	///
	/// Callers guarantee `len > 0`.
	fn next_index(&mut self, len: usize) -> usize;

	/// Picks one element of `items`, or `None` if the slice is empty.
	fn next_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		items.get(self.next_index(items.len()))
	}
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
	rng: R,
}

impl<R: Rng> RngSource<R> {
	/// Wraps an existing generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RngSource<StdRng> {
	/// Deterministic source: identical seeds yield identical draw sequences.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}

	/// Non-reproducible source seeded from the thread-local generator.
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_rng(&mut rand::rng()))
	}

	/// Seeds when a seed is given, otherwise falls back to entropy.
	pub fn for_seed(seed: Option<u64>) -> Self {
		match seed {
			Some(seed) => Self::seeded(seed),
			None => Self::from_entropy(),
		}
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn next_int(&mut self, range: RangeInclusive<u32>) -> u32 {
		self.rng.random_range(range)
	}

	fn next_index(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}
