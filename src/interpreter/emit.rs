//! Expansion of plain code lines.
//!
//! Substitutes every `R<digits>` reference with its stored value at
//! controller precision (3 decimals; expressions keep full f64 precision
//! internally, only the emitted text is rounded), then tightens the spacing
//! around `=` so the controller sees `X=5.000` rather than `X = 5.000`.

use super::error::ErrorKind;
use super::expr::Variables;

/// Replace each variable token left-to-right with its formatted value.
/// An unassigned variable is fatal, never a silent 0.
pub fn expand(line: &str, vars: &Variables) -> Result<String, ErrorKind> {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'R' && chars.peek().is_some_and(char::is_ascii_digit) {
            let mut name = String::from("R");
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    name.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            match vars.get(&name) {
                Some(v) => out.push_str(&format!("{v:.3}")),
                None => return Err(ErrorKind::UndefinedVariable(name)),
            }
        } else {
            out.push(c);
        }
    }
    Ok(tighten_assignments(&out))
}

/// Drop whitespace touching either side of every `=`.
fn tighten_assignments(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '=' {
            while out.ends_with([' ', '\t']) {
                out.pop();
            }
            out.push('=');
            while chars.peek().is_some_and(|&n| n == ' ' || n == '\t') {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, Variables, expand};

    fn store() -> Variables {
        [
            ("R1".to_string(), 6.0),
            ("R2".to_string(), 1.5),
            ("R12".to_string(), 0.1234),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_substitution_and_spacing() {
        let vars = store();
        let test_cases = vec![
            ("X=R1", "X=6.000"),
            ("X = R1", "X=6.000"),
            ("G1 X=R1 Y=R2 F100", "G1 X=6.000 Y=1.500 F100"),
            // rounded to controller precision
            ("Z = R12", "Z=0.123"),
            // longest digit run wins: R12 is one token, not R1 then `2`
            ("X=R12", "X=0.123"),
            // `R` not followed by a digit passes through untouched
            ("Rapid=1", "Rapid=1"),
            ("G0 X0", "G0 X0"),
        ];

        for (src, expected) in test_cases {
            assert_eq!(expand(src, &vars).unwrap(), expected, "{src}");
        }
    }

    #[test]
    fn test_undefined_variable_is_fatal() {
        let vars = store();
        assert_eq!(
            expand("X=R9", &vars),
            Err(ErrorKind::UndefinedVariable("R9".into()))
        );
    }
}
