//! Fatal interpretation errors.
//!
//! Every one of these aborts the run; there is nothing to retry, because
//! re-running the same program over the same store reproduces the same
//! failure. The caller decides whether to exit the process.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A variable was read before any assignment. Never defaults to zero.
    #[error("undefined variable {0}")]
    UndefinedVariable(String),

    /// A jump target absent from the label table.
    #[error("undefined label {0}")]
    UndefinedLabel(String),

    /// A GOTOB/GOTOF whose target lies on the wrong side of the jump.
    #[error("{0}")]
    InvalidJumpDirection(String),

    /// A condition with none of `>= <= != == > <` in it.
    #[error("unsupported condition operator in `{0}`")]
    UnsupportedConditionOperator(String),

    /// The full-width `；` marker; only the ASCII `;` comment form is valid.
    #[error("full-width comment marker, use ASCII `;`")]
    InvalidCommentMarker,

    /// Same label defined on two lines.
    #[error("label {0} defined more than once")]
    DuplicateLabel(String),

    /// Anything outside numbers, R-variables, `+ - * /` and parentheses.
    #[error("expression syntax: {0}")]
    ExpressionSyntax(String),
}

/// An [`ErrorKind`] pinned to the program line that raised it. The index is
/// 0-based internally and reported 1-based, like an editor would show it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {}: {}", .line + 1, .kind)]
pub struct MacroError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl MacroError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}
