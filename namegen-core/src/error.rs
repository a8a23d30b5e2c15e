use thiserror::Error;

use crate::vocabulary::VocabularyCategory;

/// Errors raised by the name generation core.
///
/// All variants are configuration or programmer errors: the core performs
/// no I/O, so nothing here is transient and nothing is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameGenError {
	/// An enum-valued option was given a tag outside its accepted set.
	#[error("invalid {option} '{value}' (expected one of: {})", .accepted.join(", "))]
	InvalidOption {
		option: &'static str,
		value: String,
		accepted: &'static [&'static str],
	},

	/// A vocabulary category has no words to draw from.
	#[error("vocabulary category '{0}' is empty")]
	EmptyVocabulary(VocabularyCategory),

	/// A grammar template was requested for an unsupported word count.
	#[error("word count {0} is outside the supported range 1..=5")]
	WordCountOutOfRange(u8),
}
