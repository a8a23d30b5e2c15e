use std::collections::HashSet;
use std::ops::RangeInclusive;

use namegen_core::model::grammar::to_past;
use namegen_core::model::suffix::SYMBOLS;
use namegen_core::{FormatSpec, NameGenerator, RandomSource, SuffixSpec, Vocabulary, VocabularyCategory};
use regex::Regex;

/// Source that always draws the lowest value of the requested range.
struct LowestDraw;

impl RandomSource for LowestDraw {
	fn next_int(&mut self, range: RangeInclusive<u32>) -> u32 {
		*range.start()
	}

	fn next_index(&mut self, _len: usize) -> usize {
		0
	}
}

fn format_pattern(format: FormatSpec) -> Regex {
	let pattern = match format {
		FormatSpec::Kebab => r"^[a-z0-9]+(-[a-z0-9]+)*$",
		FormatSpec::Snake => r"^[a-z0-9]+(_[a-z0-9]+)*$",
		FormatSpec::Camel => r"^[a-z][a-zA-Z0-9]*$",
		FormatSpec::Pascal => r"^[A-Z][a-zA-Z0-9]*$",
		FormatSpec::Space => r"^[A-Z][a-z]*( [A-Z][a-z]*)*$",
	};
	Regex::new(pattern).unwrap()
}

#[test]
fn every_format_matches_its_convention() {
	let mut generator = NameGenerator::with_seed(Some(2024));
	for format in FormatSpec::ALL {
		let pattern = format_pattern(format);
		for _ in 0..300 {
			let name = generator.generate(None, format, SuffixSpec::None).unwrap();
			assert!(pattern.is_match(&name), "{format}: {name}");
		}
	}
}

#[test]
fn word_count_is_always_between_one_and_five() {
	let mut generator = NameGenerator::with_seed(Some(77));
	for requested in [None, Some(-10), Some(0), Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(99)] {
		for _ in 0..50 {
			let name = generator.generate(requested, FormatSpec::Kebab, SuffixSpec::None).unwrap();
			let words = name.split('-').count();
			assert!((1..=5).contains(&words), "{requested:?}: {name}");
			if let Some(requested) = requested {
				assert_eq!(words as i64, requested.clamp(1, 5), "{name}");
			}
		}
	}
}

#[test]
fn seed_then_generate_is_reproducible() {
	for seed in [0, 1, 42, u64::MAX] {
		let first = NameGenerator::with_seed(Some(seed))
			.generate(Some(3), FormatSpec::Camel, SuffixSpec::UuidLike)
			.unwrap();
		let second = NameGenerator::with_seed(Some(seed))
			.generate(Some(3), FormatSpec::Camel, SuffixSpec::UuidLike)
			.unwrap();
		assert_eq!(first, second);
	}
}

#[test]
fn unseeded_output_varies() {
	let mut generator = NameGenerator::with_seed(None);
	let distinct: HashSet<String> = (0..1000)
		.map(|_| generator.generate(Some(3), FormatSpec::Kebab, SuffixSpec::None).unwrap())
		.collect();
	assert!(distinct.len() > 50, "only {} distinct names", distinct.len());
}

#[test]
fn suffixes_follow_their_contract() {
	let mut generator = NameGenerator::with_seed(Some(8));
	let digits = Regex::new(r"^[a-z]+-([0-9]{3})$").unwrap();
	let hex = Regex::new(r"^[a-z]+-[0-9a-f]{3}$").unwrap();
	let uuid = Regex::new(r"^[a-z]+-[0-9a-f]{6}$").unwrap();

	for _ in 0..300 {
		let name = generator.generate(Some(1), FormatSpec::Kebab, SuffixSpec::Digits).unwrap();
		let captures = digits.captures(&name).unwrap_or_else(|| panic!("{name}"));
		let value: u32 = captures[1].parse().unwrap();
		assert!((100..=999).contains(&value), "{name}");

		let name = generator.generate(Some(1), FormatSpec::Kebab, SuffixSpec::Hex).unwrap();
		assert!(hex.is_match(&name), "{name}");

		let name = generator.generate(Some(1), FormatSpec::Kebab, SuffixSpec::UuidLike).unwrap();
		assert!(uuid.is_match(&name), "{name}");

		let name = generator.generate(Some(1), FormatSpec::Kebab, SuffixSpec::Symbol).unwrap();
		let (base, symbol) = name.split_at(name.len() - 1);
		assert!(base.ends_with('-') && base.len() > 1, "{name}");
		assert!(SYMBOLS.contains(&symbol.chars().next().unwrap()), "{name}");
	}
}

#[test]
fn space_format_attaches_suffix_with_space() {
	let mut generator = NameGenerator::with_seed(Some(31));
	let name = generator.generate(Some(2), FormatSpec::Space, SuffixSpec::Digits).unwrap();
	let parts: Vec<&str> = name.split(' ').collect();
	assert_eq!(parts.len(), 3, "{name}");
	assert!(parts[2].bytes().all(|b| b.is_ascii_digit()), "{name}");
}

#[test]
fn snake_format_attaches_suffix_with_hyphen() {
	let mut generator = NameGenerator::with_seed(Some(31));
	let name = generator.generate(Some(3), FormatSpec::Snake, SuffixSpec::Hex).unwrap();
	let (base, suffix) = name.rsplit_once('-').unwrap();
	assert_eq!(base.split('_').count(), 3, "{name}");
	assert_eq!(suffix.len(), 3, "{name}");
}

#[test]
fn past_tense_follows_documented_rules() {
	assert_eq!(to_past("escape"), "escaped");
	assert_eq!(to_past("blast"), "blasted");
	// y rule applies after vowels too
	assert_eq!(to_past("deploy"), "deploied");
}

#[test]
fn lowest_draw_yields_first_noun() {
	let first_noun = Vocabulary::builtin().words_for(VocabularyCategory::Noun)[0];
	let mut generator = NameGenerator::new(LowestDraw);
	let name = generator.generate(Some(1), FormatSpec::Kebab, SuffixSpec::None).unwrap();
	assert_eq!(name, first_noun.to_lowercase());
}

#[test]
fn lowest_draw_follows_slot_order() {
	let vocabulary = Vocabulary::builtin();
	let first = |category| vocabulary.words_for(category)[0];
	let mut generator = NameGenerator::new(LowestDraw);

	let name = generator.generate(Some(5), FormatSpec::Kebab, SuffixSpec::Digits).unwrap();
	let expected = format!(
		"the-{}-{}-{}-{}-100",
		first(VocabularyCategory::Adjective),
		first(VocabularyCategory::Noun),
		first(VocabularyCategory::Adverb),
		to_past(first(VocabularyCategory::Verb)),
	);
	assert_eq!(name, expected);
}

#[test]
fn five_words_in_space_format_start_with_the() {
	let mut generator = NameGenerator::with_seed(None);
	for _ in 0..100 {
		let name = generator.generate(Some(5), FormatSpec::Space, SuffixSpec::None).unwrap();
		assert!(name.starts_with("The "), "{name}");
	}
}
