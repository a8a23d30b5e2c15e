use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::NameGenError;
use crate::model::random::RandomSource;

/// Fixed symbol set used by [`SuffixSpec::Symbol`].
pub const SYMBOLS: [char; 11] = ['!', '@', '#', '$', '%', '^', '&', '*', '-', '_', '~'];

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Kind of random token appended to a base name.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuffixSpec {
	/// No suffix.
	#[default]
	None,
	/// Three decimal digits in `100..=999`.
	Digits,
	/// Three lowercase hex digits in `000..=fff`.
	Hex,
	/// One character from [`SYMBOLS`].
	Symbol,
	/// Six independent lowercase hex digits (not a real UUID).
	#[serde(rename = "uuid")]
	UuidLike,
}

impl SuffixSpec {
	pub const ALL: [SuffixSpec; 5] = [Self::None, Self::Digits, Self::Hex, Self::Symbol, Self::UuidLike];

	/// Accepted textual tags, in the same order as [`Self::ALL`].
	pub const TAGS: &'static [&'static str] = &["none", "digits", "hex", "symbol", "uuid"];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Digits => "digits",
			Self::Hex => "hex",
			Self::Symbol => "symbol",
			Self::UuidLike => "uuid",
		}
	}

	/// Draws a suffix token; empty for [`SuffixSpec::None`].
	///
	/// Draws consumed per kind:
	/// - `None`: zero
	/// - `Digits`, `Hex`: one integer draw
	/// - `Symbol`: one index draw
	/// - `UuidLike`: six index draws
	pub fn generate<S: RandomSource>(self, source: &mut S) -> String {
		let suffix = match self {
			Self::None => String::new(),
			Self::Digits => source.next_int(100..=999).to_string(),
			Self::Hex => format!("{:03x}", source.next_int(0..=0xfff)),
			Self::Symbol => source.next_choice(&SYMBOLS).map(char::to_string).unwrap_or_default(),
			Self::UuidLike => (0..6)
				.filter_map(|_| source.next_choice(HEX_DIGITS).map(|b| char::from(*b)))
				.collect(),
		};
		trace!(kind = %self, suffix = %suffix, "generated suffix");
		suffix
	}
}

impl fmt::Display for SuffixSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for SuffixSpec {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|spec| spec.as_str() == tag)
			.ok_or_else(|| NameGenError::InvalidOption {
				option: "suffix",
				value: s.to_owned(),
				accepted: Self::TAGS,
			})
	}
}
