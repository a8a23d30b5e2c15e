//! Thematic multi-word name generation library.
//!
//! This crate provides a small grammar-driven name generator, including:
//! - Categorized vocabulary lists (nouns, verbs, adjectives, adverbs)
//! - Word selection and per-count grammar templates
//! - Optional random suffixes (digits, hex, symbol, uuid-like)
//! - Case formatting (kebab, snake, camel, pascal, space)
//!
//! Randomness is always injected through a [`model::random::RandomSource`],
//! so a caller seeding it once gets fully reproducible output.

/// Error taxonomy shared by every component.
pub mod error;

/// Name generation pipeline.
///
/// Exposes the high-level [`model::generator::NameGenerator`] and the
/// components it is built from.
pub mod model;

/// Static categorized word lists.
pub mod vocabulary;

pub use error::NameGenError;
pub use model::format::FormatSpec;
pub use model::generator::NameGenerator;
pub use model::random::{RandomSource, RngSource};
pub use model::request::GenerationRequest;
pub use model::suffix::SuffixSpec;
pub use vocabulary::{Vocabulary, VocabularyCategory};
