// Caption text normalization
//
// Three stages, always in this order:
// - annotations: drop bracketed spans ([...], {...}, <...>)
// - merge: rebuild sentences split across soft line breaks
// - casing: sentence case plus lexicon overrides

pub mod annotations;
pub mod casing;
pub mod merge;

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::subtitle::{trim_blank, CaptionRecord};

pub use annotations::strip_annotations;
pub use casing::sentence_case;
pub use merge::merge_soft_breaks;

/// Rewrites caption text against an injected lexicon.
///
/// Holds only a shared reference, so one lexicon can serve any number of
/// normalizers across threads.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Normalize one caption's text. Never fails: text that is empty once
    /// annotations are removed yields an empty string.
    pub fn normalize(&self, raw_text: &str) -> String {
        let stripped = strip_annotations(raw_text);
        let stripped = trim_blank(&stripped);
        if stripped.is_empty() {
            return String::new();
        }

        let merged = merge_soft_breaks(stripped);
        sentence_case(&merged, self.lexicon)
    }

    /// New records with `normalized_text` computed from each `raw_text`;
    /// the input is left untouched and order is preserved.
    pub fn normalize_all(&self, records: &[CaptionRecord]) -> Vec<CaptionRecord> {
        let normalized: Vec<CaptionRecord> = records
            .iter()
            .map(|record| record.with_normalized(self.normalize(&record.raw_text)))
            .collect();

        let emptied = normalized
            .iter()
            .filter(|r| r.normalized_text.as_deref() == Some(""))
            .count();
        debug!("Normalized {} records ({} empty after stripping)", normalized.len(), emptied);

        normalized
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

/// Normalize with the built-in lexicon
pub fn normalize(raw_text: &str) -> String {
    Normalizer::default().normalize(raw_text)
}

/// Normalize every record with the built-in lexicon
pub fn normalize_all(records: &[CaptionRecord]) -> Vec<CaptionRecord> {
    Normalizer::default().normalize_all(records)
}
