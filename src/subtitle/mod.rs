// SubRip (SRT) caption handling
//
// - Parser: best-effort block parser, malformed blocks are dropped
// - Writer: emits records back in the same block grammar

pub mod parser;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use parser::parse;
pub use writer::serialize;

/// One caption block as found in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRecord {
    /// Sequence number as declared in the file, kept even when out of order
    pub index: u64,
    /// `HH:MM:SS,mmm`, never interpreted numerically
    pub start_time: String,
    pub end_time: String,
    /// Text lines joined with `\n`
    pub raw_text: String,
    /// Set by the normalizer; `None` until normalization has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_text: Option<String>,
}

impl CaptionRecord {
    pub fn new(
        index: u64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            index,
            start_time: start_time.into(),
            end_time: end_time.into(),
            raw_text: raw_text.into(),
            normalized_text: None,
        }
    }

    /// Copy of this record carrying `normalized` as its derived text
    pub fn with_normalized(&self, normalized: String) -> Self {
        Self {
            normalized_text: Some(normalized),
            ..self.clone()
        }
    }

    /// Text to emit: the normalized form when requested and available
    pub fn text(&self, use_normalized: bool) -> &str {
        match (&self.normalized_text, use_normalized) {
            (Some(normalized), true) => normalized,
            _ => &self.raw_text,
        }
    }
}

/// Trim whitespace and byte order marks from both ends
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_falls_back_to_raw() {
        let record = CaptionRecord::new(1, "00:00:01,000", "00:00:02,000", "HELLO");
        assert_eq!(record.text(true), "HELLO");

        let normalized = record.with_normalized("Hello".to_string());
        assert_eq!(normalized.text(true), "Hello");
        assert_eq!(normalized.text(false), "HELLO");
        assert_eq!(record.normalized_text, None);
    }

    #[test]
    fn test_trim_blank_removes_byte_order_marks() {
        assert_eq!(trim_blank("\u{feff} 1\ntext \n"), "1\ntext");
        assert_eq!(trim_blank("\u{feff}"), "");
    }

    #[test]
    fn test_json_omits_missing_normalized_text() {
        let record = CaptionRecord::new(3, "00:00:01,000", "00:00:02,000", "hi");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("normalized_text"));

        let back: CaptionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
