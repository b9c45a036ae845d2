//! paratree CLI: paraphrases bracketed parse trees from the command line.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use paratree::bracket::{self, BracketStyle};
use paratree::model::Tree;
use paratree::service::{self, ParaphraseRequest, ParaphraseResponse, ServiceError};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paratree")]
#[command(about = "Paraphrase parse trees by reordering coordinated noun phrases")]
#[command(version)]
struct Cli {
    /// Bracketed parse tree; read from stdin when absent
    #[arg(conflicts_with = "file")]
    tree: Option<String>,

    /// File with one or more bracketed trees, each paraphrased separately
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of paraphrases per tree (default 20)
    #[arg(short, long)]
    limit: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Flat)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One flattened tree per line
    Flat,
    /// Pretty-printed trees separated by blank lines
    Indented,
    /// Response or error body as JSON, one document per input tree
    Json,
    /// Surface sentence of each paraphrase, one per line
    Text,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every request succeeded.
fn run(cli: Cli) -> Result<bool> {
    let inputs = match (&cli.tree, &cli.file) {
        (Some(tree), _) => vec![tree.clone()],
        (None, Some(path)) => read_batch(path)?,
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read tree from stdin")?;
            vec![text]
        }
    };
    tracing::debug!("Processing {} input trees", inputs.len());

    let mut all_ok = true;
    for (index, text) in inputs.into_iter().enumerate() {
        if index > 0 && cli.format != Format::Json {
            println!();
        }
        let request = ParaphraseRequest {
            tree: Some(text),
            limit: cli.limit.clone(),
        };
        match service::handle(&request) {
            Ok(response) => print_response(&response, cli.format)?,
            Err(e) => {
                all_ok = false;
                print_error(&e, cli.format);
            }
        }
    }
    Ok(all_ok)
}

/// Reads every tree of a file and returns each in flattened form.
fn read_batch(path: &Path) -> Result<Vec<String>> {
    let trees = bracket::parse_file(path)
        .with_context(|| format!("Failed to read trees from {}", path.display()))?;
    Ok(trees.iter().map(Tree::flatten).collect())
}

fn print_response(response: &ParaphraseResponse, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(response)?),
        Format::Flat => {
            for tree in response.trees() {
                println!("{tree}");
            }
        }
        Format::Indented | Format::Text => {
            for (index, flat) in response.trees().into_iter().enumerate() {
                let tree = bracket::parse_str(flat)?;
                if format == Format::Text {
                    println!("{}", tree.sentence());
                    continue;
                }
                if index > 0 {
                    println!();
                }
                println!("{}", tree.to_bracketed(&BracketStyle::default()));
            }
        }
    }
    Ok(())
}

fn print_error(error: &ServiceError, format: Format) {
    match format {
        Format::Json => println!("{}", error.to_error_body()),
        _ => eprintln!("{}: {}", error.field(), error),
    }
}
