//! Subcase - SRT Subtitle Normalizer
//!
//! Parses SubRip subtitle files and rewrites each caption into clean sentence
//! case: bracketed annotations are removed, soft-wrapped lines are merged and
//! a curated lexicon restores acronyms, names and multi-word proper nouns.

pub mod cli;
pub mod config;
pub mod workflow;
pub mod subtitle;
pub mod normalize;
pub mod lexicon;
pub mod error;

pub use lexicon::{Lexicon, LexiconBuilder};
pub use normalize::{normalize, normalize_all, Normalizer};
pub use subtitle::{parse, serialize, CaptionRecord};
