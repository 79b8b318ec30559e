use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a single SRT file and write the formatted copy
    Format {
        /// Input subtitle file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (defaults to the input file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write the original caption text instead of the normalized text
        #[arg(long)]
        raw: bool,
    },

    /// Normalize every SRT file in a directory tree
    Batch {
        /// Input directory containing subtitle files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Parse an SRT file and print its captions as JSON
    Inspect {
        /// Input subtitle file
        #[arg(short, long)]
        input: PathBuf,

        /// Include normalized text for every caption
        #[arg(short, long)]
        normalize: bool,
    },

    /// Normalize a piece of caption text given on the command line
    Text {
        /// Caption text; use "\n" inside the string for line breaks
        text: String,
    },

    /// List the lexicon rules in effect
    Lexicon {
        /// Only show how this single token is rendered
        #[arg(short, long)]
        word: Option<String>,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "subcase.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
