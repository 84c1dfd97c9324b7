//! Syntactic classification of a single source line.
//!
//! Rules apply in priority order:
//!
//! ```text
//! (empty)                          Blank
//! R<digits> = <expr>               Assignment
//! IF <condition> GOTO(B|F) <label> Conditional
//! <identifier>:                    Label
//! ;…                               Comment   (ASCII marker)
//! ；…                              InvalidComment (full-width marker)
//! anything else                    Code
//! ```
//!
//! A line that merely *starts* like an assignment or conditional but does
//! not complete the pattern falls through to `Code`.

/// Which way a conditional jump is allowed to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDir {
    Backward, // GOTOB
    Forward,  // GOTOF
}

/// Closed set of line kinds; `classify` decides, the engine dispatches.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    Assignment { name: String, expr: String },
    Conditional { cond: String, dir: JumpDir, label: String },
    Label(String),
    Comment,
    InvalidComment,
    Code,
}

pub fn classify(raw: &str) -> LineKind {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(kind) = parse_assignment(line) {
        return kind;
    }
    if let Some(kind) = parse_conditional(line) {
        return kind;
    }
    if let Some(name) = parse_label(line) {
        return LineKind::Label(name);
    }
    if line.starts_with(';') {
        return LineKind::Comment;
    }
    if line.starts_with('；') {
        return LineKind::InvalidComment;
    }
    LineKind::Code
}

/// `R<digits> = <expr>` with a non-empty right-hand side.
fn parse_assignment(line: &str) -> Option<LineKind> {
    let rest = line.strip_prefix('R')?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let expr = rest[digits.len()..].trim_start().strip_prefix('=')?.trim();
    if expr.is_empty() {
        return None;
    }
    Some(LineKind::Assignment {
        name: format!("R{digits}"),
        expr: expr.to_string(),
    })
}

/// `IF <condition> GOTO(B|F) <label>`. The *last* `GOTO` in the line splits
/// condition from target, so a condition may itself contain the letters.
fn parse_conditional(line: &str) -> Option<LineKind> {
    let rest = line.strip_prefix("IF")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let at = rest.rfind("GOTO")?;
    let cond = rest[..at].trim();
    let tail = &rest[at + 4..];
    let mut chars = tail.chars();
    let dir = match chars.next() {
        Some('B') => JumpDir::Backward,
        Some('F') => JumpDir::Forward,
        _ => return None,
    };
    let after = chars.as_str();
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let label = after.trim();
    if cond.is_empty() || !is_identifier(label) {
        return None;
    }
    Some(LineKind::Conditional {
        cond: cond.to_string(),
        dir,
        label: label.to_string(),
    })
}

/// The whole line is `<identifier>:`, nothing trailing.
fn parse_label(line: &str) -> Option<String> {
    let name = line.strip_suffix(':')?;
    is_identifier(name).then(|| name.to_string())
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
