use tracing::trace;

use crate::error::NameGenError;
use crate::model::random::RandomSource;
use crate::vocabulary::{Vocabulary, VocabularyCategory};

/// Draws uniformly random words from a [`Vocabulary`].
///
/// The selector borrows its random source for the duration of one
/// generation call; each pick consumes exactly one draw.
#[derive(Debug)]
pub struct WordSelector<'a, S: RandomSource> {
	vocabulary: &'a Vocabulary,
	source: &'a mut S,
}

impl<'a, S: RandomSource> WordSelector<'a, S> {
	pub fn new(vocabulary: &'a Vocabulary, source: &'a mut S) -> Self {
		Self { vocabulary, source }
	}

	/// Returns one word of `category`, chosen uniformly.
	///
	/// # Errors
	/// Returns [`NameGenError::EmptyVocabulary`] if the category has no words.
	pub fn pick(&mut self, category: VocabularyCategory) -> Result<&'static str, NameGenError> {
		let words = self.vocabulary.words_for(category);
		let word = self
			.source
			.next_choice(words)
			.copied()
			.ok_or(NameGenError::EmptyVocabulary(category))?;
		trace!(%category, word, "picked word");
		Ok(word)
	}

	/// Returns one word chosen uniformly from the union of all categories.
	///
	/// Consumes a single draw over the combined length, so words appearing in
	/// several categories are proportionally more likely.
	///
	/// # Errors
	/// Returns [`NameGenError::EmptyVocabulary`] (reported against the noun
	/// category) if every category is empty.
	pub fn pick_any(&mut self) -> Result<&'static str, NameGenError> {
		let total = self.vocabulary.len();
		if total == 0 {
			return Err(NameGenError::EmptyVocabulary(VocabularyCategory::Noun));
		}

		let mut index = self.source.next_index(total);
		for category in VocabularyCategory::ALL {
			let words = self.vocabulary.words_for(category);
			if index < words.len() {
				trace!(%category, word = words[index], "picked word from any category");
				return Ok(words[index]);
			}
			index -= words.len();
		}

		// Unreachable: index < total
		Err(NameGenError::EmptyVocabulary(VocabularyCategory::Noun))
	}
}
