use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, SubcaseError};

fn default_include_builtin() -> bool {
    true
}

fn default_file_prefix() -> String {
    "formatted_".to_string()
}

fn default_use_normalized() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Start from the built-in table before appending the entries below
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Extra tokens rendered fully upper-case (acronyms)
    #[serde(default)]
    pub always_uppercase: Vec<String>,
    /// Extra single tokens with a fixed capitalization pattern
    #[serde(default)]
    pub always_capitalized: Vec<String>,
    /// Extra proper nouns; entries containing whitespace become phrase rules
    #[serde(default)]
    pub proper_nouns: Vec<String>,
    /// Order in which phrase rules are applied
    #[serde(default)]
    pub phrase_order: PhraseOrder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseOrder {
    /// Declared: apply phrases in the order they appear in the table
    #[default]
    Declared,
    /// LongestFirst: apply phrases with more tokens (then more characters) first,
    /// so a phrase sharing a prefix with a longer one cannot shadow it
    LongestFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix prepended to the input file name when writing formatted output
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Write normalized text (true) or the untouched source text (false)
    #[serde(default = "default_use_normalized")]
    pub use_normalized: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            always_uppercase: Vec::new(),
            always_capitalized: Vec::new(),
            proper_nouns: Vec::new(),
            phrase_order: PhraseOrder::Declared,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            use_normalized: true,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SubcaseError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SubcaseError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SubcaseError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Reject entries that could never match as a lexicon rule
    pub fn validate(&self) -> Result<()> {
        let lexicon = &self.lexicon;
        let single_token = lexicon
            .always_uppercase
            .iter()
            .chain(lexicon.always_capitalized.iter());

        for entry in single_token {
            if entry.trim().is_empty() {
                return Err(SubcaseError::Config("Lexicon entries must not be empty".to_string()));
            }
            if entry.chars().any(char::is_whitespace) {
                return Err(SubcaseError::Config(format!(
                    "'{}' contains whitespace; multi-word entries belong in proper_nouns",
                    entry
                )));
            }
        }

        if lexicon.proper_nouns.iter().any(|entry| entry.trim().is_empty()) {
            return Err(SubcaseError::Config("Lexicon entries must not be empty".to_string()));
        }

        Ok(())
    }
}
