//! Component 1 – reads the macro program from disk.
//!
//! Nothing clever happens here: the interpreter wants the program as an
//! ordered list of raw lines and decides everything else itself.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the program file and return its lines in source order.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("opening {}", path.display()))?;
    println!("File loaded, size: {} bytes", text.len());
    Ok(text.lines().map(str::to_owned).collect())
}
