//! Subcase - SRT Subtitle Normalizer
//!
//! Command line entry point: loads configuration, sets up logging and
//! dispatches to the formatting workflow.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use subcase::cli::{Args, Commands};
use subcase::config::Config;
use subcase::error::SubcaseError;
use subcase::workflow::Workflow;

const DEFAULT_CONFIG_FILE: &str = "subcase.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Guard flushes the file appender on exit
    let _guard = setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
                info!("Found {} in current directory, loading...", DEFAULT_CONFIG_FILE);
                Config::from_file(DEFAULT_CONFIG_FILE)?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Format { input, output_dir, raw } => {
            if raw {
                config.output.use_normalized = false;
            }
            let workflow = Workflow::new(config)?;
            let report = workflow.format_file(&input, output_dir.as_ref()).await?;
            println!(
                "Formatted {} captions -> {}",
                report.captions,
                report.output.display()
            );
        }
        Commands::Batch { input_dir, output_dir } => {
            let workflow = Workflow::new(config)?;
            let reports = workflow.format_directory(&input_dir, output_dir.as_ref()).await?;
            let captions: usize = reports.iter().map(|r| r.captions).sum();
            println!("Formatted {} files ({} captions)", reports.len(), captions);
        }
        Commands::Inspect { input, normalize } => {
            let workflow = Workflow::new(config)?;
            let records = workflow.inspect_file(&input, normalize).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Text { text } => {
            let workflow = Workflow::new(config)?;
            println!("{}", workflow.format_text(&text.replace("\\n", "\n")));
        }
        Commands::Lexicon { word } => {
            let workflow = Workflow::new(config)?;
            let lexicon = workflow.lexicon();

            if let Some(word) = word {
                match lexicon.lookup(&word) {
                    Some(canonical) => println!("{} -> {}", word, canonical),
                    None => println!("{} has no token rule", word),
                }
                return Ok(());
            }

            println!("\nToken rules ({}):", lexicon.token_rules().len());
            println!("{:<20} {:<20}", "Match", "Rendered as");
            println!("{}", "-".repeat(40));
            for rule in lexicon.token_rules() {
                println!("{:<20} {:<20}", rule.pattern, rule.canonical);
            }

            println!("\nPhrase rules ({}), in application order:", lexicon.phrase_rules().len());
            for rule in lexicon.phrase_rules() {
                println!("  {}", rule.canonical);
            }
        }
        Commands::InitConfig { output, force } => {
            if output.exists() && !force {
                return Err(SubcaseError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    output.display()
                ))
                .into());
            }
            Config::default().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = std::env::current_dir()?.join(".subcase").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotation
    let file_appender = rolling::daily(&log_dir, "subcase.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console output goes to stderr so JSON on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("subcase.log").display());

    Ok(guard)
}
