//! CLI tool that builds the Vibe Survival game deck and writes it to disk.

use anyhow::{Context, Result};
use clap::Parser;
use deck_pptx::PptxWriter;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Build the Vibe Survival game project presentation.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON manifest of the generated deck instead of the path
    #[arg(long)]
    manifest: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Summary of a generated deck, printed with `--manifest`.
#[derive(Debug, Serialize)]
struct Manifest {
    output: PathBuf,
    slide_count: usize,
    shape_counts: Vec<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let presentation = deck_slides::build();
    log::debug!(
        "Built {} slides, {} shapes total",
        presentation.slide_count(),
        presentation
            .slides
            .iter()
            .map(|s| s.shape_count())
            .sum::<usize>()
    );

    let output_path = resolve_output_path(args.output.as_deref())?;
    PptxWriter::new()
        .save(&presentation, &output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;

    if args.manifest {
        let manifest = Manifest {
            output: output_path,
            slide_count: presentation.slide_count(),
            shape_counts: presentation
                .slides
                .iter()
                .map(|s| s.shape_count())
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        println!("Presentation saved to: {}", output_path.display());
    }

    Ok(())
}

/// Resolve the absolute output file path: the fixed deck file name inside
/// the given directory, or the current working directory when none is
/// given. The directory is created if it does not exist.
fn resolve_output_path(output_dir: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;

    let dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                cwd.join(dir)
            }
        }
        None => cwd,
    };

    Ok(dir.join(deck_slides::DECK_FILE_NAME))
}
