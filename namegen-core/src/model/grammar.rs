use tracing::trace;

use crate::error::NameGenError;
use crate::model::random::RandomSource;
use crate::model::selector::WordSelector;
use crate::vocabulary::{Vocabulary, VocabularyCategory};

/// Smallest supported word count.
pub const MIN_WORDS: u8 = 1;

/// Largest supported word count.
pub const MAX_WORDS: u8 = 5;

/// Fixed literal opening the five-word template.
pub const ARTICLE: &str = "the";

/// One position of a grammar template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	/// A fixed word, never drawn.
	Literal(&'static str),
	/// A word drawn from a category.
	Word(VocabularyCategory),
	/// A verb drawn then put into the past tense.
	PastVerb,
}

use Slot::{Literal, PastVerb, Word};
use VocabularyCategory::{Adjective, Adverb, Noun};

/// Returns the slot sequence for a word count.
///
/// # Errors
/// Returns [`NameGenError::WordCountOutOfRange`] outside `1..=5`; callers
/// are expected to clamp first.
pub fn template(word_count: u8) -> Result<&'static [Slot], NameGenError> {
	match word_count {
		1 => Ok(&[Word(Noun)]),
		2 => Ok(&[Word(Adjective), Word(Noun)]),
		3 => Ok(&[Word(Adjective), Word(Noun), PastVerb]),
		4 => Ok(&[Word(Adverb), Word(Adjective), Word(Noun), PastVerb]),
		5 => Ok(&[Literal(ARTICLE), Word(Adjective), Word(Noun), Word(Adverb), PastVerb]),
		other => Err(NameGenError::WordCountOutOfRange(other)),
	}
}

/// Composes a word sequence following the template for `word_count`.
///
/// Slots are drawn strictly left to right, one draw each; literals draw
/// nothing.
///
/// # Errors
/// - [`NameGenError::WordCountOutOfRange`] if `word_count` is not in `1..=5`
/// - [`NameGenError::EmptyVocabulary`] if a needed category is empty
pub fn compose<S: RandomSource>(
	vocabulary: &Vocabulary,
	source: &mut S,
	word_count: u8,
) -> Result<Vec<String>, NameGenError> {
	let slots = template(word_count)?;
	let mut selector = WordSelector::new(vocabulary, source);

	let mut words = Vec::with_capacity(slots.len());
	for slot in slots {
		let word = match slot {
			Literal(text) => (*text).to_owned(),
			Word(category) => selector.pick(*category)?.to_owned(),
			PastVerb => to_past(selector.pick(VocabularyCategory::Verb)?),
		};
		words.push(word);
	}

	trace!(?words, "composed words");
	Ok(words)
}

/// Puts a regular verb into the simple past tense.
///
/// Rules, first match wins:
/// 1. ends in `e`: append `d` (`escape` → `escaped`)
/// 2. ends in `y`: replace the `y` with `ied` (`deploy` → `deploied`)
/// 3. otherwise: append `ed` (`blast` → `blasted`)
///
/// Rule 2 applies even after a vowel. Existing names depend on it, so it
/// is kept as is.
pub fn to_past(verb: &str) -> String {
	if verb.ends_with('e') {
		format!("{verb}d")
	} else if let Some(stem) = verb.strip_suffix('y') {
		format!("{stem}ied")
	} else {
		format!("{verb}ed")
	}
}
