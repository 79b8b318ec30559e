//! Sentence-case rewriting with lexicon overrides.
//!
//! Word characters are ASCII letters, digits and `_`. A word boundary sits
//! between a word character and anything else, including either end of the
//! text. Lexicon matching is case-insensitive and always replaces the whole
//! match with the canonical form.

use crate::lexicon::{Lexicon, PhraseRule, TokenRule};

/// Characters after which the next word character starts a sentence
const CAPITALIZATION_TRIGGERS: [char; 8] = ['.', '!', '?', ';', ':', ']', '}', '\n'];

/// Lower-case, re-capitalize sentence starts, then apply single-token and
/// phrase rules in that order.
pub fn sentence_case(text: &str, lexicon: &Lexicon) -> String {
    let cased = capitalize_sentences(text);
    let cased = apply_token_rules(&cased, lexicon.token_rules());
    apply_phrase_rules(&cased, lexicon.phrase_rules())
}

/// Lower-case everything, then upper-case the first word character of the
/// text and the first one after any trigger (skipping whitespace).
pub fn capitalize_sentences(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut capitalize_next = true;

    for ch in lowered.chars() {
        if capitalize_next && is_word_char(ch) {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
            continue;
        }

        if CAPITALIZATION_TRIGGERS.contains(&ch) {
            capitalize_next = true;
        } else if !ch.is_whitespace() {
            capitalize_next = false;
        }
        result.push(ch);
    }

    result
}

/// Replace whole-word matches of the single-token rules.
///
/// At each position the first rule (in lexicon order) that matches with a
/// boundary on both sides wins, and scanning resumes after the match.
pub fn apply_token_rules(text: &str, rules: &[TokenRule]) -> String {
    if rules.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < chars.len() {
        if is_boundary(&chars, pos) {
            let hit = rules.iter().find_map(|rule| {
                match_literal(&chars, pos, &rule.pattern)
                    .filter(|&end| is_boundary(&chars, end))
                    .map(|end| (end, rule.canonical.as_str()))
            });

            if let Some((end, canonical)) = hit {
                result.push_str(canonical);
                pos = end;
                continue;
            }
        }

        result.push(chars[pos]);
        pos += 1;
    }

    result
}

/// Apply each phrase rule over the whole text, one rule after another
pub fn apply_phrase_rules(text: &str, rules: &[PhraseRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| apply_phrase_rule(&acc, rule))
}

fn apply_phrase_rule(text: &str, rule: &PhraseRule) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < chars.len() {
        if is_boundary(&chars, pos) {
            if let Some(end) =
                match_phrase(&chars, pos, &rule.tokens).filter(|&end| is_boundary(&chars, end))
            {
                result.push_str(&rule.canonical);
                pos = end;
                continue;
            }
        }

        result.push(chars[pos]);
        pos += 1;
    }

    result
}

/// Tokens separated by one or more whitespace characters
fn match_phrase(chars: &[char], start: usize, tokens: &[String]) -> Option<usize> {
    let mut pos = start;

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let gap_start = pos;
            while chars.get(pos).is_some_and(|c| c.is_whitespace()) {
                pos += 1;
            }
            if pos == gap_start {
                return None;
            }
        }
        pos = match_literal(chars, pos, token)?;
    }

    Some(pos)
}

/// End position when `pattern` matches case-insensitively at `start`
fn match_literal(chars: &[char], start: usize, pattern: &str) -> Option<usize> {
    let mut pos = start;
    for expected in pattern.chars() {
        let &actual = chars.get(pos)?;
        if !eq_ignore_case(actual, expected) {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_boundary(chars: &[char], pos: usize) -> bool {
    let before = pos > 0 && is_word_char(chars[pos - 1]);
    let after = chars.get(pos).is_some_and(|&c| is_word_char(c));
    before != after
}
