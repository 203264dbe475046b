//! pdfpluck CLI - extract embedded raster images from PDF documents
//!
//! Thin driver over the library pipelines: by default it runs both
//! extraction strategies in sequence, object-model into
//! `<out>/object_model/` and layout-tree into `<out>/layout/`.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pdfpluck::{
    extract_with_strategy, ExtractionReport, Strategy, WriteOutcome,
};

#[derive(Parser)]
#[command(name = "pdfpluck")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract embedded raster images from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output directory root (defaults to "<stem>_images")
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Run a single strategy instead of both
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Print the extraction report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Direct object-model traversal of page image resources
    ObjectModel,
    /// Shallow search over per-page layout element trees
    LayoutTree,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ObjectModel => Strategy::ObjectModel,
            StrategyArg::LayoutTree => Strategy::LayoutTree,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let output_root = cli.output.clone().unwrap_or_else(|| {
        let stem = cli.input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_images", stem))
    });

    // The fixed sequence: object-model first, then layout-tree. With
    // --strategy only the chosen pipeline runs.
    let strategies: Vec<Strategy> = match cli.strategy {
        Some(arg) => vec![arg.into()],
        None => vec![Strategy::ObjectModel, Strategy::LayoutTree],
    };

    let mut reports = Vec::new();
    for strategy in strategies {
        let dir = output_root.join(subdir(strategy));
        match extract_with_strategy(strategy, &cli.input, &dir) {
            Ok(report) => reports.push(report),
            Err(e) => {
                // Document-open failures are fatal for the run
                eprintln!("{}: {}", "Error".red().bold(), e);
                std::process::exit(1);
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    for report in &reports {
        print_report(report, &output_root);
    }
}

fn subdir(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ObjectModel => "object_model",
        Strategy::LayoutTree => "layout",
    }
}

fn label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ObjectModel => "object-model",
        Strategy::LayoutTree => "layout-tree",
    }
}

fn print_report(report: &ExtractionReport, output_root: &Path) {
    println!(
        "{} {} -> {}",
        label(report.strategy).cyan().bold(),
        report.source.display(),
        output_root.join(subdir(report.strategy)).display()
    );

    for outcome in &report.outcomes {
        match &outcome.outcome {
            WriteOutcome::Written { path } => {
                println!(
                    "  {} {}",
                    "Extracted".green(),
                    path.file_name().unwrap_or_default().to_string_lossy()
                );
            }
            WriteOutcome::Failed { reason } => {
                println!("  {} {}: {}", "Failed".red(), outcome.filename, reason);
            }
        }
    }

    println!(
        "  {} {} of {} images written\n",
        "Done!".green().bold(),
        report.written_count(),
        report.discovered()
    );
}
