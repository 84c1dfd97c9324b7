//! Comparison conditions for `IF … GOTO` lines.

use super::error::ErrorKind;
use super::expr::{self, Variables};

/// Two-character operators first, so `>=` is never mis-split into `>`.
const OPERATORS: [&str; 6] = [">=", "<=", "!=", "==", ">", "<"];

/// Split `cond` at the first recognized operator, evaluate both sides over
/// the store and apply the comparison. A condition with no operator at all
/// is fatal.
pub fn eval(cond: &str, vars: &Variables) -> Result<bool, ErrorKind> {
    for op in OPERATORS {
        if let Some(at) = cond.find(op) {
            let left = expr::eval(cond[..at].trim(), vars)?;
            let right = expr::eval(cond[at + op.len()..].trim(), vars)?;
            return Ok(match op {
                ">=" => left >= right,
                "<=" => left <= right,
                "!=" => left != right,
                "==" => left == right,
                ">" => left > right,
                _ => left < right,
            });
        }
    }
    Err(ErrorKind::UnsupportedConditionOperator(cond.to_string()))
}
