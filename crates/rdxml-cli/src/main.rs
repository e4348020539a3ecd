use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rdxml::{Config, TreePrinter};

#[derive(Debug, Parser)]
#[command(
    name = "rdxml",
    version,
    about = "Parse an XML file and dump its element tree"
)]
struct Args {
    /// Input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,
    /// Maximum element nesting depth (0, or anything above 256, means 256)
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_size)]
    max_size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented element tree
    Tree,
    /// XML written back out
    Xml,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    info!(path = %args.input.display(), "reading input");
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    let config = Config::new(args.max_depth, args.max_size);
    let doc = match rdxml::from_str_with_config(&content, config) {
        Ok(doc) => doc,
        Err(err) => {
            debug!(offset = err.offset(), "parse failed");
            report_failure(&err, &content).context("failed to write stderr")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = match args.format {
        OutputFormat::Tree => TreePrinter::default().document(&doc),
        OutputFormat::Xml => doc.to_xml() + "\n",
    };

    io::stdout()
        .write_all(output.as_bytes())
        .context("failed to write stdout")?;
    Ok(ExitCode::SUCCESS)
}

/// Error message, then the input the parser could not consume
fn report_failure(err: &rdxml::Error, content: &str) -> io::Result<()> {
    let remaining = content.get(err.offset()..).unwrap_or_default();
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{err}")?;
    writeln!(stderr)?;
    writeln!(stderr, "Chars left: {}", remaining.chars().count())?;
    writeln!(stderr)?;
    writeln!(stderr, "{remaining}")?;
    Ok(())
}
