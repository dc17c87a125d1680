// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::config::{AnalyzerConfig, discover_config};
use crate::core::batch::{Processed, TextAnalyzer};
use crate::core::frequency::relative_frequency;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File or directory to analyze
    pub path: PathBuf,

    /// Directory the report is written to (defaults to current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Report file name in single-file mode
    #[arg(long)]
    pub file_report: Option<String>,

    /// Report file name in directory mode
    #[arg(long)]
    pub directory_report: Option<String>,

    /// Only analyze files whose name matches this glob (directory mode)
    #[arg(short, long)]
    pub glob: Option<String>,

    /// Print the relative frequency of this word (repeatable)
    #[arg(short, long = "query", value_name = "WORD")]
    pub queries: Vec<String>,

    /// TOML config file (defaults to ./wfw.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Builds the analyzer from `args`, processes the file or directory and
/// prints where the report was saved.
///
/// # Errors
///
/// Fails if the configuration is invalid or processing fails.
pub fn run(args: Args) -> Result<()> {
    let current_dir = env::current_dir()?;
    let file_config = discover_config(args.config.as_deref(), &current_dir)
        .context("Failed to load configuration")?;
    let config = AnalyzerConfig::resolve(
        args.output_dir,
        args.file_report,
        args.directory_report,
        args.glob,
        file_config,
    )?;
    let analyzer = TextAnalyzer::new(config);

    let processed = if args.path.is_dir() {
        analyzer
            .run_directory(&args.path)
            .with_context(|| format!("Failed to process directory: {}", args.path.display()))?
    } else {
        analyzer
            .run_file(&args.path)
            .with_context(|| format!("Failed to process file: {}", args.path.display()))?
    };

    print_queries(&processed, &args.queries);
    println!(
        "Processing complete. Results saved to {}",
        processed.report_path.display()
    );

    Ok(())
}

fn print_queries(processed: &Processed, queries: &[String]) {
    for analyzed in &processed.documents {
        for word in queries {
            println!(
                "{}: {} = {:.4}",
                analyzed.document.name,
                word,
                relative_frequency(&analyzed.words, word)
            );
        }
    }
}
