use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use reflow::{merge_lines_to_paragraph, SentenceSplitter, SplitOptions};

#[derive(Parser, Debug)]
#[command(name = "reflow")]
#[command(about = "Merge lines into a paragraph or split a paragraph into sentences")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Read input from a file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Write output to a file (UTF-8) instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collapse multi-line input into a single paragraph
    Merge,
    /// Split a paragraph into sentences separated by blank lines
    Split {
        /// Remove periods and commas and downgrade double quotes to single
        /// quotes in each sentence (legacy output style)
        #[arg(long)]
        strip_punctuation: bool,
    },
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout carries only the transformed text
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let text = read_input(args.input.as_ref())?;

    // WHY: blank-input rejection is a caller concern; the engine itself
    // accepts blank text and would just produce empty output
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty or whitespace-only; nothing to reshape");
    }

    let result = match args.command {
        Command::Merge => {
            info!(bytes = text.len(), "Merging lines into a paragraph");
            merge_lines_to_paragraph(&text)
        }
        Command::Split { strip_punctuation } => {
            info!(
                bytes = text.len(),
                strip_punctuation, "Splitting paragraph into sentences"
            );
            let splitter = SentenceSplitter::new(SplitOptions { strip_punctuation });
            splitter.split_to_text(&text)
        }
    };

    write_output(args.output.as_ref(), &result)?;
    info!(bytes = result.len(), "Done");
    Ok(())
}
