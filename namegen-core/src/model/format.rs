use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameGenError;

/// Textual convention used to render a word sequence.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormatSpec {
	/// `dark-falcon`
	#[default]
	Kebab,
	/// `dark_falcon`
	Snake,
	/// `darkFalcon`
	Camel,
	/// `DarkFalcon`
	Pascal,
	/// `Dark Falcon`
	Space,
}

impl FormatSpec {
	pub const ALL: [FormatSpec; 5] = [Self::Kebab, Self::Snake, Self::Camel, Self::Pascal, Self::Space];

	/// Accepted textual tags, in the same order as [`Self::ALL`].
	pub const TAGS: &'static [&'static str] = &["kebab", "snake", "camel", "pascal", "space"];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Kebab => "kebab",
			Self::Snake => "snake",
			Self::Camel => "camel",
			Self::Pascal => "pascal",
			Self::Space => "space",
		}
	}

	/// Separator placed between the base name and a non-empty suffix.
	///
	/// Only `Space` differs: every other format attaches with a hyphen,
	/// snake case included. Generated names in the wild rely on this.
	pub const fn suffix_separator(self) -> char {
		match self {
			Self::Space => ' ',
			Self::Kebab | Self::Snake | Self::Camel | Self::Pascal => '-',
		}
	}

	/// Renders `words` and an optional `suffix` into a single name.
	///
	/// - `Kebab` / `Snake`: lowercase words joined by `-` / `_`
	/// - `Camel`: first word lowercase, the others capitalized, no separator
	/// - `Pascal`: every word capitalized, no separator
	/// - `Space`: every word capitalized, joined by a single space
	///
	/// An empty `suffix` leaves the base name untouched.
	pub fn format<S: AsRef<str>>(self, words: &[S], suffix: &str) -> String {
		let words = words.iter().map(AsRef::as_ref);
		let mut name = match self {
			Self::Kebab => join_lowercase(words, "-"),
			Self::Snake => join_lowercase(words, "_"),
			Self::Camel => words
				.enumerate()
				.map(|(i, word)| if i == 0 { word.to_lowercase() } else { capitalize(word) })
				.collect(),
			Self::Pascal => words.map(capitalize).collect(),
			Self::Space => words.map(capitalize).collect::<Vec<_>>().join(" "),
		};

		if !suffix.is_empty() {
			name.push(self.suffix_separator());
			name.push_str(suffix);
		}
		name
	}
}

fn join_lowercase<'a>(words: impl Iterator<Item = &'a str>, separator: &str) -> String {
	words.map(str::to_lowercase).collect::<Vec<_>>().join(separator)
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

impl fmt::Display for FormatSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for FormatSpec {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|spec| spec.as_str() == tag)
			.ok_or_else(|| NameGenError::InvalidOption {
				option: "format",
				value: s.to_owned(),
				accepted: Self::TAGS,
			})
	}
}
