//! Component 2 – the functional core.
//!
//! Turns a macro program (R-parameters, labels, conditional jumps) into the
//! flat code lines a controller can execute directly. The boundary is a pure
//! function over lines; no I/O happens in here.

pub mod cond;
pub mod emit;
pub mod engine;
pub mod error;
pub mod expr;
pub mod labels;
pub mod line;

pub use error::{ErrorKind, MacroError};

/// Run one full interpretation over `program` with fresh state and return
/// the expanded lines in emission order.
///
/// Every call builds its own variable store, label table and cursor, so
/// concurrent or repeated calls never observe each other.
pub fn interpret(program: &[String]) -> Result<Vec<String>, MacroError> {
    engine::Engine::new(program)?.run()
}
