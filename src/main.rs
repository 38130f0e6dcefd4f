//! ansible-doc-md — convert the output of `ansible-doc --json` into markdown.
//!
//! Reads one JSON document mapping module names to their documentation and
//! writes a markdown page section per module, in input order:
//!
//! - `ansible-doc-md < docs.json > docs.md`
//! - `ansible-doc-md docs.json docs.md`

mod markup;
mod model;
mod render;
mod wrap;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Path argument meaning "use the standard stream".
const STDIO_MARKER: &str = "-";

#[derive(Parser)]
#[command(
    name = "ansible-doc-md",
    version,
    about = "Convert output of ansible-doc --json into decent-looking markdown"
)]
struct Cli {
    /// Output of ansible-doc --json (default: stdin)
    input: Option<String>,

    /// Where to put the markdown output (default: stdout)
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Input is fully read and parsed before the destination is touched.
    let source = read_input(cli.input.as_deref())?;
    let modules = model::parse_modules(&source)?;
    debug!(modules = modules.len(), "parsed input");

    let config = render::RenderConfig::default();
    let (mut out, dest) = open_output(cli.output.as_deref())?;
    render::render_modules(&mut out, &modules, &config)?;
    out.flush()
        .with_context(|| format!("failed to write {}", dest))?;
    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some(STDIO_MARKER) => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path)),
    }
}

/// Open the destination, returning the writer and a name for error messages.
fn open_output(path: Option<&str>) -> Result<(Box<dyn Write>, String)> {
    match path {
        None | Some(STDIO_MARKER) => Ok((
            Box::new(BufWriter::new(io::stdout().lock())),
            "stdout".to_string(),
        )),
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path))?;
            Ok((Box::new(BufWriter::new(file)), path.to_string()))
        }
    }
}
