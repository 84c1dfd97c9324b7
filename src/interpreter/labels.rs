//! Pre-pass that records every label's line index before execution starts,
//! so forward jumps always resolve.

use std::collections::HashMap;

use super::error::{ErrorKind, MacroError};
use super::line::{LineKind, classify};

pub type LabelTable = HashMap<String, usize>;

/// Scan the whole program for `name:` lines. Defining the same name twice is
/// a hard error rather than silently letting the last occurrence win.
pub fn build(program: &[String]) -> Result<LabelTable, MacroError> {
    let mut table = LabelTable::new();
    for (idx, raw) in program.iter().enumerate() {
        if let LineKind::Label(name) = classify(raw) {
            if table.insert(name.clone(), idx).is_some() {
                return Err(MacroError::new(idx, ErrorKind::DuplicateLabel(name)));
            }
        }
    }
    Ok(table)
}
