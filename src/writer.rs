//! Component 3 – persists the expanded code lines.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write one code line per physical line. Controllers expect CRLF endings,
/// so they are emitted on every platform.
pub fn write(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut f = File::create(path)?;
    for line in lines {
        write!(f, "{line}\r\n")?;
    }
    Ok(())
}
