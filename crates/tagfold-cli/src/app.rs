//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use tagfold_core::{FoldingEngine, FoldingRange, LanguageRegion, Settings};

/// Config file names looked up in the working directory
const CONFIG_CANDIDATES: [&str; 2] = ["tagfold.toml", ".tagfold.toml"];

/// Output format for ranges and regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `start-end kind` line per entry
    #[default]
    Text,
    /// JSON array for editor and tool integration
    Json,
}

#[derive(Parser)]
#[command(name = "tagfold")]
#[command(author, version, about = "Folding ranges for HTML-like markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the folding ranges of a document
    Ranges {
        /// Input markup file
        input: PathBuf,

        /// Maximum number of ranges (whole nesting levels are kept)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Settings file (defaults to tagfold.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the embedded-language regions of a document
    Regions {
        /// Input markup file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Settings file (defaults to tagfold.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run_cli() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ranges {
            input,
            limit,
            format,
            config,
        } => {
            ranges_command(&input, limit, format, config.as_deref())?;
        }
        Commands::Regions {
            input,
            format,
            config,
        } => {
            regions_command(&input, format, config.as_deref())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the ranges command
pub fn ranges_command(
    input: &Path,
    limit: Option<usize>,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<()> {
    print!("{}", ranges_output(input, limit, format, config)?);
    Ok(())
}

/// Folding ranges of `input`, rendered in `format`
pub fn ranges_output(
    input: &Path,
    limit: Option<usize>,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<String> {
    let content = read_input(input)?;
    let engine = load_engine(config)?;
    let ranges = engine.compute(&content, limit);
    debug!("{}: {} folding ranges", input.display(), ranges.len());

    match format {
        OutputFormat::Json => to_json(&ranges),
        OutputFormat::Text => Ok(ranges_text(input, &ranges)),
    }
}

/// Execute the regions command
pub fn regions_command(input: &Path, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    print!("{}", regions_output(input, format, config)?);
    Ok(())
}

/// Embedded-language regions of `input`, rendered in `format`
pub fn regions_output(input: &Path, format: OutputFormat, config: Option<&Path>) -> Result<String> {
    let content = read_input(input)?;
    let engine = load_engine(config)?;
    let regions = engine.partition(&content);

    match format {
        OutputFormat::Json => to_json(&regions),
        OutputFormat::Text => Ok(regions_text(input, &regions)),
    }
}

fn ranges_text(input: &Path, ranges: &[FoldingRange]) -> String {
    if ranges.is_empty() {
        return format!("No folding ranges in {}\n", input.display());
    }
    let mut out = String::new();
    for range in ranges {
        let _ = writeln!(
            out,
            "{}-{} {}",
            range.start_line,
            range.end_line,
            range.kind.as_str()
        );
    }
    out
}

fn regions_text(input: &Path, regions: &[LanguageRegion]) -> String {
    if regions.is_empty() {
        return format!("No embedded regions in {}\n", input.display());
    }
    let mut out = String::new();
    for region in regions {
        let _ = writeln!(
            out,
            "{}-{} {}",
            region.start_line, region.end_line, region.language_id
        );
    }
    out
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    Ok(json + "\n")
}

fn read_input(input: &Path) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

fn load_engine(config: Option<&Path>) -> Result<FoldingEngine> {
    let settings = load_settings(config)?;
    FoldingEngine::new(settings).context("Invalid region marker pattern in settings")
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => match find_config(Path::new(".")) {
            Some(path) => path,
            None => return Ok(Settings::default()),
        },
    };

    debug!("Loading settings from {}", path.display());
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// First config candidate present in `dir`
fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
