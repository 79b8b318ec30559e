use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubcaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("No valid captions found in {0}")]
    NoCaptions(String),
}

pub type Result<T> = std::result::Result<T, SubcaseError>;
