//! Name generation pipeline.
//!
//! Data flows one way:
//! - A `RandomSource` feeds the `WordSelector` and the suffix generator
//! - The grammar engine composes a word sequence from a per-count template
//! - The case formatter renders words and suffix into the final string
//! - The `NameGenerator` ties the stages together

/// High-level orchestrator owning the random source.
pub mod generator;

/// Per-count grammar templates and the past-tense transform.
pub mod grammar;

/// Case formatting of a word sequence plus suffix.
pub mod format;

/// Injected random source abstraction over `rand`.
pub mod random;

/// Generation parameters (word count, format, suffix, seed).
pub mod request;

/// Uniform word selection from vocabulary categories.
pub mod selector;

/// Optional random suffix tokens.
pub mod suffix;
