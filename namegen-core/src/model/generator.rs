use tracing::debug;

use crate::error::NameGenError;
use crate::model::format::FormatSpec;
use crate::model::grammar::{self, MAX_WORDS, MIN_WORDS};
use crate::model::random::{RandomSource, RngSource};
use crate::model::request::{GenerationRequest, clamp_word_count};
use crate::model::suffix::SuffixSpec;
use crate::vocabulary::Vocabulary;

use rand::rngs::StdRng;

/// High-level name generator.
///
/// # Responsibilities
/// - Own the random source for its whole lifetime
/// - Resolve the word count (clamp or draw)
/// - Run grammar, suffix and formatting stages in a fixed order
///
/// # Reproducibility
/// Per call, draws happen in this order: word count (only when absent),
/// grammar slots left to right, then suffix. A generator built from a
/// seeded source therefore yields the same sequence of names every run.
#[derive(Debug)]
pub struct NameGenerator<S: RandomSource = RngSource<StdRng>> {
	vocabulary: Vocabulary,
	source: S,
}

impl NameGenerator {
	/// Creates a generator over the built-in vocabulary.
	///
	/// # Parameters
	/// - `seed`: `Some` for reproducible output, `None` to seed from entropy.
	pub fn with_seed(seed: Option<u64>) -> Self {
		Self::new(RngSource::for_seed(seed))
	}

	/// Creates a generator whose source is built from `request.seed`.
	pub fn for_request(request: &GenerationRequest) -> Self {
		Self::with_seed(request.seed)
	}
}

impl<S: RandomSource> NameGenerator<S> {
	/// Creates a generator over the built-in vocabulary using `source`.
	pub fn new(source: S) -> Self {
		Self::with_vocabulary(Vocabulary::builtin(), source)
	}

	/// Creates a generator over a custom vocabulary.
	pub fn with_vocabulary(vocabulary: Vocabulary, source: S) -> Self {
		Self { vocabulary, source }
	}

	/// Returns the vocabulary in use.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Generates one name.
	///
	/// # Parameters
	/// - `word_count`: clamped into `1..=5`; `None` draws one uniformly.
	/// - `format`: output case convention.
	/// - `suffix`: kind of random token appended to the base name.
	///
	/// # Errors
	/// Returns [`NameGenError::EmptyVocabulary`] if a category needed by the
	/// template is empty. Never happens with the built-in vocabulary.
	pub fn generate(
		&mut self,
		word_count: Option<i64>,
		format: FormatSpec,
		suffix: SuffixSpec,
	) -> Result<String, NameGenError> {
		let word_count = match word_count {
			Some(count) => clamp_word_count(count),
			None => clamp_word_count(i64::from(
				self.source.next_int(u32::from(MIN_WORDS)..=u32::from(MAX_WORDS)),
			)),
		};
		debug!(word_count, %format, %suffix, "generating name");

		let words = grammar::compose(&self.vocabulary, &mut self.source, word_count)?;
		let suffix_text = suffix.generate(&mut self.source);

		Ok(format.format(&words, &suffix_text))
	}

	/// Generates one name from a [`GenerationRequest`].
	///
	/// `request.seed` is ignored here: seeding belongs to the source, which
	/// this generator already owns.
	pub fn generate_request(&mut self, request: &GenerationRequest) -> Result<String, NameGenError> {
		self.generate(request.word_count, request.format, request.suffix)
	}

	/// Generates `count` names as sequential calls sharing the source.
	pub fn generate_batch(
		&mut self,
		request: &GenerationRequest,
		count: usize,
	) -> Result<Vec<String>, NameGenError> {
		(0..count).map(|_| self.generate_request(request)).collect()
	}
}
