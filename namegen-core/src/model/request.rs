use serde::{Deserialize, Serialize};

use crate::model::format::FormatSpec;
use crate::model::grammar::{MAX_WORDS, MIN_WORDS};
use crate::model::suffix::SuffixSpec;

/// Input parameters for one generation call.
///
/// # Fields
/// - `word_count`: requested number of words; any value is accepted and
///   clamped into `1..=5`, `None` draws one uniformly.
/// - `format`: case convention of the output.
/// - `suffix`: kind of random token appended to the base name.
/// - `seed`: seed for the random source. Only read when the caller builds
///   the source (see [`crate::RngSource::for_seed`]); a generator that
///   already owns a source ignores it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationRequest {
	pub word_count: Option<i64>,
	pub format: FormatSpec,
	pub suffix: SuffixSpec,
	pub seed: Option<u64>,
}

impl GenerationRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_word_count(mut self, word_count: i64) -> Self {
		self.word_count = Some(word_count);
		self
	}

	pub fn with_format(mut self, format: FormatSpec) -> Self {
		self.format = format;
		self
	}

	pub fn with_suffix(mut self, suffix: SuffixSpec) -> Self {
		self.suffix = suffix;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}

/// Clamps an arbitrary requested word count into `1..=5`.
pub fn clamp_word_count(word_count: i64) -> u8 {
	// Lossless: the value is clamped into 1..=5 first
	word_count.clamp(i64::from(MIN_WORDS), i64::from(MAX_WORDS)) as u8
}
