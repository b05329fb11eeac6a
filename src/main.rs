// src/main.rs
mod extractors;
mod prompt;
mod storage;
mod utils;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use extractors::{condense, parse_tables};
use storage::StorageManager;
use utils::AppError;

/// Command line interface for article condensing and table extraction
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Condense an article to the body between Abstract and References
    Condense {
        /// Input text file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Prepend the spectral-data instructional template
        #[arg(short, long)]
        prompt: bool,

        /// Output directory (prints to stdout when omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File stem for saved output
        #[arg(long, default_value = "article")]
        name: String,
    },

    /// Extract markdown tables with their nearest preceding headings
    Tables {
        /// Input markdown file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (prints JSON to stdout when omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File stem for saved output
        #[arg(long, default_value = "article")]
        name: String,
    },
}

fn read_input(input: Option<&PathBuf>) -> Result<String, AppError> {
    match input {
        Some(path) => {
            tracing::debug!("Reading input from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("Reading input from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match args.command {
        Command::Condense { input, prompt: with_prompt, output_dir, name } => {
            let text = read_input(input.as_ref())?;
            tracing::info!("Condensing article ({} bytes)", text.len());

            let output = if with_prompt {
                prompt::build_prompt(&text)
            } else {
                condense(&text)
            };
            tracing::info!("Condensed output is {} bytes", output.len());

            match output_dir {
                Some(dir) => {
                    let storage = StorageManager::new(&dir)?;
                    storage.save_prompt(&name, &output)?;
                }
                None => println!("{}", output),
            }
        }

        Command::Tables { input, output_dir, name } => {
            let markdown = read_input(input.as_ref())?;
            tracing::info!("Parsing markdown ({} bytes)", markdown.len());

            let tables = parse_tables(&markdown);
            tracing::info!("Extracted {} tables", tables.len());

            match output_dir {
                Some(dir) => {
                    let storage = StorageManager::new(&dir)?;
                    storage.save_tables(&name, &tables)?;
                    storage.save_tables_metadata(&name, &tables)?;
                }
                None => {
                    let json = serde_json::to_string_pretty(&tables)
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    println!("{}", json);
                }
            }
        }
    }

    Ok(())
}
