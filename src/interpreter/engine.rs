//! Cursor-driven execution over a classified program.
//!
//! The engine walks the program one line at a time; a taken jump is the only
//! non-linear transfer. It deliberately enforces no iteration bound: a loop
//! whose condition never turns false is the input program's problem.

use super::cond;
use super::emit;
use super::error::{ErrorKind, MacroError};
use super::expr::{self, Variables};
use super::labels::{self, LabelTable};
use super::line::{JumpDir, LineKind, classify};

/// One interpretation run. Owns the cursor, variable store and output for
/// the duration of a single `run` call; nothing survives it.
pub struct Engine<'a> {
    program: &'a [String],
    labels: LabelTable,
    vars: Variables,
    output: Vec<String>,
    cursor: usize,
}

impl<'a> Engine<'a> {
    /// Build the label table up front so forward references resolve.
    pub fn new(program: &'a [String]) -> Result<Self, MacroError> {
        Ok(Self {
            program,
            labels: labels::build(program)?,
            vars: Variables::new(),
            output: Vec::new(),
            cursor: 0,
        })
    }

    pub fn run(mut self) -> Result<Vec<String>, MacroError> {
        while self.cursor < self.program.len() {
            self.step()?;
        }
        Ok(self.output)
    }

    fn step(&mut self) -> Result<(), MacroError> {
        let idx = self.cursor;
        let at = |kind| MacroError::new(idx, kind);

        match classify(&self.program[idx]) {
            LineKind::Blank | LineKind::Comment | LineKind::Label(_) => {}
            LineKind::Assignment { name, expr } => {
                let value = expr::eval(&expr, &self.vars).map_err(at)?;
                self.vars.insert(name, value);
            }
            LineKind::Conditional { cond, dir, label } => {
                if cond::eval(&cond, &self.vars).map_err(at)? {
                    // next iteration executes the label line itself
                    self.cursor = self.jump_target(idx, dir, &label)?;
                    return Ok(());
                }
            }
            LineKind::InvalidComment => return Err(at(ErrorKind::InvalidCommentMarker)),
            LineKind::Code => {
                let expanded = emit::expand(self.program[idx].trim(), &self.vars).map_err(at)?;
                self.output.push(expanded);
            }
        }
        self.cursor = idx + 1;
        Ok(())
    }

    /// Resolve `label` and check the jump travels its declared direction.
    fn jump_target(&self, from: usize, dir: JumpDir, label: &str) -> Result<usize, MacroError> {
        let target = *self
            .labels
            .get(label)
            .ok_or_else(|| MacroError::new(from, ErrorKind::UndefinedLabel(label.to_string())))?;
        match dir {
            JumpDir::Backward if target >= from => Err(MacroError::new(
                from,
                ErrorKind::InvalidJumpDirection(
                    "GOTOB target must precede the current line".into(),
                ),
            )),
            JumpDir::Forward if target <= from => Err(MacroError::new(
                from,
                ErrorKind::InvalidJumpDirection(
                    "GOTOF target must follow the current line".into(),
                ),
            )),
            _ => Ok(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::interpret;
    use super::*;

    fn program(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_straight_line_emission() {
        let prog = program(&[
            "; header comment",
            "R1 = 2",
            "",
            "G0 X0",
            "G1 X=R1 F100",
        ]);
        let out = interpret(&prog).unwrap();
        assert_eq!(out, vec!["G0 X0", "G1 X=2.000 F100"]);
    }

    #[test]
    fn test_assignment_chain() {
        let prog = program(&["R1=2", "R2=R1*3", "X=R2"]);
        let out = interpret(&prog).unwrap();
        assert_eq!(out, vec!["X=6.000"]);
    }

    #[test]
    fn test_backward_jump_loops_until_false() {
        // empty loop body emits nothing, but must terminate at R1 == 3
        let prog = program(&["L:", "R1=0", "R1=R1+1", "IF R1<3 GOTOB L"]);
        let out = interpret(&prog).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_backward_jump_reexecutes_label_line() {
        // jump lands *on* the label line; R1 resets would loop forever, so
        // the counter lives before the label
        let prog = program(&[
            "R1=0",
            "loop:",
            "R1=R1+1",
            "N=R1",
            "IF R1<3 GOTOB loop",
        ]);
        let out = interpret(&prog).unwrap();
        assert_eq!(out, vec!["N=1.000", "N=2.000", "N=3.000"]);
    }

    #[test]
    fn test_forward_jump_skips_lines() {
        let prog = program(&["R1=5", "IF R1>3 GOTOF L", "G1 X1", "L:", "G1 X2"]);
        let out = interpret(&prog).unwrap();
        assert_eq!(out, vec!["G1 X2"]);
    }

    #[test]
    fn test_false_condition_falls_through() {
        let prog = program(&["R1=1", "IF R1>3 GOTOF L", "G1 X1", "L:", "G1 X2"]);
        let out = interpret(&prog).unwrap();
        assert_eq!(out, vec!["G1 X1", "G1 X2"]);
    }

    #[test]
    fn test_undefined_label() {
        let prog = program(&["R1=5", "IF R1>3 GOTOF nowhere"]);
        let err = interpret(&prog).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ErrorKind::UndefinedLabel("nowhere".into()));
    }

    #[test]
    fn test_backward_jump_to_later_label_is_fatal() {
        let prog = program(&["R1=5", "IF R1>3 GOTOB L", "L:"]);
        let err = interpret(&prog).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.kind, ErrorKind::InvalidJumpDirection(_)));
    }

    #[test]
    fn test_forward_jump_to_earlier_label_is_fatal() {
        let prog = program(&["L:", "R1=5", "IF R1>3 GOTOF L"]);
        let err = interpret(&prog).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ErrorKind::InvalidJumpDirection(_)));
    }

    #[test]
    fn test_full_width_comment_is_fatal() {
        let prog = program(&["R1=1", "；注释"]);
        let err = interpret(&prog).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ErrorKind::InvalidCommentMarker);
    }

    #[test]
    fn test_error_carries_line_index() {
        let prog = program(&["G0 X0", "X=R9"]);
        let err = interpret(&prog).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ErrorKind::UndefinedVariable("R9".into()));
        assert_eq!(err.to_string(), "line 2: undefined variable R9");
    }
}
