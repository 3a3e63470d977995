//! Scopestyle CLI
//!
//! Compiles a JSON style spec into scoped CSS rules and prints them, for
//! inspecting compiler output without writing a test.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use scopestyle::{StyleSpec, compile};

/// Compile a JSON style spec into scoped CSS rules.
#[derive(Parser)]
#[command(name = "scopestyle", version, about)]
struct Args {
    /// Path to a JSON style spec file.
    spec: Option<PathBuf>,

    /// Base name for the scoped root class.
    #[arg(short, long, default_value = "style")]
    base: String,

    /// Inline JSON spec instead of a file.
    #[arg(long, conflicts_with = "spec")]
    json: Option<String>,

    /// Also print the class name for these active variant flags
    /// (comma-separated, e.g. `hover,selected`).
    #[arg(long, value_delimiter = ',')]
    flags: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match (&args.spec, &args.json) {
        (_, Some(json)) => json.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read spec file {}", path.display()))?,
        (None, None) => bail!("pass a spec file or --json '<spec>'"),
    };

    let spec: StyleSpec =
        serde_json::from_str(&text).context("spec is not a valid JSON style spec")?;
    let style = compile(&spec, &args.base).context("compilation failed")?;

    println!("{}", style.to_css());

    if let Some(flags) = &args.flags {
        let active: Vec<&str> = flags.iter().map(String::as_str).collect();
        println!();
        println!("class: {}", style.class_name(&active));
    }

    Ok(())
}
