pub mod cli;
pub mod interpreter;
pub mod loader;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Load ───────────────────────────────────────────────────────
    let program =
        loader::load(&args.input).with_context(|| format!("Reading {}", args.input.display()))?;

    // 2. ── Interpret ──────────────────────────────────────────────────
    let expanded =
        interpreter::interpret(&program).with_context(|| "Expanding macro program")?;

    // 3. ── Write output ───────────────────────────────────────────────
    for line in &expanded {
        println!("{line}");
    }
    writer::write(&args.output, &expanded)
        .with_context(|| format!("Writing {}", args.output.display()))?;

    Ok(())
}
