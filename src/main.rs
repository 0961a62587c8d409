//! hanspace - Main Entry Point
//!
//! Command-line host for the text normalizer: reads a complete text
//! snapshot from a file or stdin, inserts spaces at Han/Latin boundaries,
//! and writes the result to a file or stdout.

use clap::Parser;
use hanspace::files::{read_input, write_output};
use hanspace::normalize;
use log::debug;
use std::path::PathBuf;

/// Application name constant.
const APP_NAME: &str = "hanspace";

/// Add spaces between CJK ideographs and Latin letters or digits.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version, about)]
struct Args {
    /// Input file; reads from stdin when omitted
    input: Option<PathBuf>,

    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{}: {}", APP_NAME, err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> hanspace::Result<()> {
    let text = read_input(args.input.as_deref())?;
    debug!("normalizing {} bytes", text.len());

    let result = normalize(&text);
    write_output(args.output.as_deref(), &result)
}
