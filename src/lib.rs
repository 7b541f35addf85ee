//! Phonetic encoding & edit distance primitives for spelling suggestion.
//!
//! Two pure, stateless building blocks: a Knuth-variant soundex encoder for
//! bucketing words into phonetic equivalence classes, and a rolling-row
//! Levenshtein distance for ranking candidate corrections.

pub mod edit_distance;
pub mod soundex;
pub mod string_strategy;

mod error;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use crate::edit_distance::{DistanceAlgorithm, EditDistance, levenshtein};
pub use crate::error::Error;
pub use crate::soundex::{
    DEFAULT_CODE_LENGTH, DEFAULT_PAD, Soundex, SoundexBuilder, soundex, soundex_of_length,
};
#[cfg(not(target_arch = "wasm32"))]
pub use crate::string_strategy::AsciiStringStrategy;
pub use crate::string_strategy::{StringStrategy, UnicodeStringStrategy};
