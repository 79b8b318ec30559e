use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, SubcaseError};
use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::subtitle::{self, CaptionRecord};

const SUBTITLE_EXTENSION: &str = "srt";

/// Outcome of formatting one subtitle file
#[derive(Debug, Clone)]
pub struct FormatReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Captions parsed from the input
    pub captions: usize,
    /// Captions whose text was only annotations
    pub emptied: usize,
}

pub struct Workflow {
    config: Config,
    lexicon: Lexicon,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let lexicon = Lexicon::from_config(&config.lexicon);

        info!(
            "Lexicon ready: {} token rules, {} phrase rules",
            lexicon.token_rules().len(),
            lexicon.phrase_rules().len()
        );

        Ok(Self { config, lexicon })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.lexicon)
    }

    /// Normalize a single piece of caption text
    pub fn format_text(&self, text: &str) -> String {
        self.normalizer().normalize(text)
    }

    /// Parse a subtitle file, optionally normalizing every record
    pub async fn inspect_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        normalize: bool,
    ) -> Result<Vec<CaptionRecord>> {
        let records = self.read_captions(input_path.as_ref()).await?;

        if normalize {
            Ok(self.normalizer().normalize_all(&records))
        } else {
            Ok(records)
        }
    }

    /// Format a single subtitle file and write `<prefix><name>` next to it,
    /// or into `output_dir` when given
    pub async fn format_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Option<Q>,
    ) -> Result<FormatReport> {
        let input_path = input_path.as_ref();
        info!("Formatting subtitle file: {}", input_path.display());

        if !is_subtitle_file(input_path) {
            return Err(SubcaseError::UnsupportedFormat(format!(
                "{} is not an .srt file",
                input_path.display()
            )));
        }

        let output_dir = match output_dir {
            Some(dir) => dir.as_ref().to_path_buf(),
            None => input_path
                .parent()
                .ok_or_else(|| SubcaseError::Config("Cannot determine output directory".to_string()))?
                .to_path_buf(),
        };

        self.format_into(input_path, &output_dir).await
    }

    /// Format every `.srt` file under `input_dir`, mirroring sub-directories
    /// into `output_dir` (default: in place). Failures are logged and skipped.
    pub async fn format_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Option<Q>,
    ) -> Result<Vec<FormatReport>> {
        let input_dir = input_dir.as_ref();
        info!("Formatting directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            return Err(SubcaseError::Config("Input path is not a directory".to_string()));
        }

        let output_dir = match output_dir {
            Some(dir) => dir.as_ref().to_path_buf(),
            None => input_dir.to_path_buf(),
        };

        let subtitle_files = self.collect_subtitle_files(input_dir);
        info!("Found {} subtitle files to format", subtitle_files.len());

        let pb = ProgressBar::new(subtitle_files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut reports = Vec::new();
        for subtitle_path in subtitle_files {
            let target_dir = subtitle_path
                .parent()
                .and_then(|parent| pathdiff::diff_paths(parent, input_dir))
                .map(|relative| output_dir.join(relative))
                .unwrap_or_else(|| output_dir.clone());

            pb.set_message(display_name(&subtitle_path));
            match self.format_into(&subtitle_path, &target_dir).await {
                Ok(report) => {
                    info!("Successfully formatted: {}", subtitle_path.display());
                    reports.push(report);
                }
                Err(e) => warn!("Failed to format {}: {}", subtitle_path.display(), e),
            }
            pb.inc(1);
        }
        pb.finish_with_message("done");

        Ok(reports)
    }

    async fn format_into(&self, input_path: &Path, output_dir: &Path) -> Result<FormatReport> {
        let records = self.read_captions(input_path).await?;
        let normalized = self.normalizer().normalize_all(&records);
        let emptied = normalized
            .iter()
            .filter(|r| r.normalized_text.as_deref() == Some(""))
            .count();

        let output_path = self.output_path(input_path, output_dir)?;
        fs::create_dir_all(output_dir).await?;

        let content = subtitle::serialize(&normalized, self.config.output.use_normalized);
        fs::write(&output_path, content).await?;

        info!(
            "Wrote {} captions to {} ({} empty after stripping)",
            normalized.len(),
            output_path.display(),
            emptied
        );

        Ok(FormatReport {
            input: input_path.to_path_buf(),
            output: output_path,
            captions: normalized.len(),
            emptied,
        })
    }

    /// Read and parse, treating a file without any valid block as an error
    async fn read_captions(&self, input_path: &Path) -> Result<Vec<CaptionRecord>> {
        if !input_path.exists() {
            return Err(SubcaseError::FileNotFound(input_path.display().to_string()));
        }

        let bytes = fs::read(input_path).await?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8, invalid sequences were replaced",
                    input_path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let records = subtitle::parse(&content);
        if records.is_empty() {
            return Err(SubcaseError::NoCaptions(input_path.display().to_string()));
        }

        debug!("Parsed {} captions from {}", records.len(), input_path.display());
        Ok(records)
    }

    fn output_path(&self, input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        let file_name = input_path
            .file_name()
            .ok_or_else(|| SubcaseError::Config("Invalid subtitle filename".to_string()))?
            .to_string_lossy();

        let output_path = output_dir.join(format!("{}{}", self.config.output.file_prefix, file_name));
        if output_path == input_path {
            return Err(SubcaseError::Config(format!(
                "Refusing to overwrite input file {}; set output.file_prefix or choose another output directory",
                input_path.display()
            )));
        }

        Ok(output_path)
    }

    fn collect_subtitle_files(&self, input_dir: &Path) -> Vec<PathBuf> {
        let prefix = &self.config.output.file_prefix;
        let mut subtitle_files = Vec::new();

        for entry in WalkDir::new(input_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !is_subtitle_file(path) {
                continue;
            }

            // Output of an earlier run
            if !prefix.is_empty() && display_name(path).starts_with(prefix.as_str()) {
                debug!("Skipping already formatted file: {}", path.display());
                continue;
            }

            subtitle_files.push(path.to_path_buf());
        }

        subtitle_files
    }
}

fn is_subtitle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SUBTITLE_EXTENSION))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
