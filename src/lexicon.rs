//! Curated casing exceptions applied on top of sentence case.
//!
//! The table is assembled once and split into two indexes: ordered
//! single-token rules with a case-insensitive lookup, and multi-token phrase
//! rules that are matched as whole units after the single tokens.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{LexiconConfig, PhraseOrder};

/// Acronyms kept fully upper-case
pub const BUILTIN_UPPERCASE: &[&str] = &["BBQ", "NASA", "FBI"];

/// Tokens with a fixed capitalization wherever they appear
pub const BUILTIN_CAPITALIZED: &[&str] = &["I", "I'm", "I've", "I'd", "I'll", "Node.js"];

/// Names, days, months, places and abbreviations
pub const BUILTIN_PROPER_NOUNS: &[&str] = &[
    // Days and months
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday", "Sunday",
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
    // People
    "John", "Mary", "Grace", "Ambrosius", "Emily",
    "Kevin", "Toby", "Cory", "Josh", "Chrissy",
    "Jack", "Steven", "Danya", "Van", "Vanessa", "Amber",
    "Kev", "Adam",
    "Ambrosius Vallin", "Kevin Archer",
    // Places
    "New York", "Dante's Cove", "Dante's", "Hotel Dante",
    // Abbreviations
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Ave", "St", "Rd",
    "a.m.", "p.m.", "etc.", "e.g.",
    // Other
    "Voodoo Cults",
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| LexiconBuilder::new().with_builtin().build());

/// A single-token rewrite: `pattern` is the lower-cased key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRule {
    pub pattern: String,
    pub canonical: String,
}

/// A multi-token rewrite: `tokens` are lower-cased and matched with any run
/// of whitespace between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRule {
    pub tokens: Vec<String>,
    pub canonical: String,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    tokens: Vec<TokenRule>,
    token_index: HashMap<String, usize>,
    phrases: Vec<PhraseRule>,
}

impl Lexicon {
    /// The built-in table, constructed on first use and shared afterwards
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut builder = LexiconBuilder::new();
        if config.include_builtin {
            builder = builder.with_builtin();
        }

        builder
            .always_uppercase(&config.always_uppercase)
            .always_capitalized(&config.always_capitalized)
            .proper_nouns(&config.proper_nouns)
            .phrase_order(config.phrase_order)
            .build()
    }

    /// Case-insensitive single-token lookup
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.token_index
            .get(&token.to_lowercase())
            .map(|&idx| self.tokens[idx].canonical.as_str())
    }

    /// Single-token rules in match priority order
    pub fn token_rules(&self) -> &[TokenRule] {
        &self.tokens
    }

    /// Phrase rules in application order
    pub fn phrase_rules(&self) -> &[PhraseRule] {
        &self.phrases
    }
}

/// Collects lexicon entries by category and derives the two indexes.
///
/// Single-token rules keep category order (upper-case, capitalized, proper
/// nouns). A repeated key replaces the canonical form of the earlier rule
/// without moving it.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    uppercase: Vec<String>,
    capitalized: Vec<String>,
    proper_nouns: Vec<String>,
    phrase_order: PhraseOrder,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin(self) -> Self {
        self.always_uppercase(BUILTIN_UPPERCASE)
            .always_capitalized(BUILTIN_CAPITALIZED)
            .proper_nouns(BUILTIN_PROPER_NOUNS)
    }

    pub fn always_uppercase<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.uppercase
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_uppercase()));
        self
    }

    pub fn always_capitalized<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.capitalized
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_string()));
        self
    }

    pub fn proper_nouns<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.proper_nouns
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_string()));
        self
    }

    pub fn phrase_order(mut self, order: PhraseOrder) -> Self {
        self.phrase_order = order;
        self
    }

    pub fn build(self) -> Lexicon {
        let mut lexicon = Lexicon::default();

        let (phrases, single_nouns): (Vec<String>, Vec<String>) = self
            .proper_nouns
            .into_iter()
            .filter(|w| !w.is_empty())
            .partition(|w| w.contains(char::is_whitespace));

        let singles = self
            .uppercase
            .into_iter()
            .chain(self.capitalized)
            .chain(single_nouns)
            .filter(|w| !w.is_empty());

        for word in singles {
            let key = word.to_lowercase();
            match lexicon.token_index.get(&key).copied() {
                Some(idx) => lexicon.tokens[idx].canonical = word,
                None => {
                    lexicon.token_index.insert(key.clone(), lexicon.tokens.len());
                    lexicon.tokens.push(TokenRule { pattern: key, canonical: word });
                }
            }
        }

        for phrase in phrases {
            if lexicon.phrases.iter().any(|p| p.canonical == phrase) {
                continue;
            }
            let tokens = phrase.split_whitespace().map(str::to_lowercase).collect();
            lexicon.phrases.push(PhraseRule { tokens, canonical: phrase });
        }

        if self.phrase_order == PhraseOrder::LongestFirst {
            // Stable, so equal-length phrases keep their declared order
            lexicon.phrases.sort_by(|a, b| {
                b.tokens
                    .len()
                    .cmp(&a.tokens.len())
                    .then_with(|| b.canonical.chars().count().cmp(&a.canonical.chars().count()))
            });
        }

        lexicon
    }
}
