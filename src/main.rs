use anyhow::{Context, Result};
use argv_split::{demo, reader::read_first_line, tokenize};
use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Split lines into tokens the way a shell would.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tokenize the first line read from stdin
    #[arg(long, conflicts_with = "lines")]
    stdin: bool,

    /// Lines to tokenize; the built-in samples are used when none are given
    lines: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "starting");

    if cli.stdin {
        let line = read_first_line(io::stdin().lock()).context("failed to read a line from stdin")?;
        println!("INPUT:  ({line})");
        let tokens = tokenize(&line).with_context(|| format!("failed to tokenize ({line})"))?;
        println!("RESULT: {tokens:?}");
        return Ok(());
    }

    if cli.lines.is_empty() {
        for sample in demo::SAMPLES {
            println!("{}", demo::describe(sample));
        }
    } else {
        for line in &cli.lines {
            println!("{}", demo::describe(line));
        }
    }

    Ok(())
}
