use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .MPF macro program
    #[arg(default_value = "input.MPF")]
    pub input: PathBuf,
    /// Output file for the expanded code lines
    #[arg(default_value = "output.MPF")]
    pub output: PathBuf,
}
