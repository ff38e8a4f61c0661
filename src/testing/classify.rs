//! Output classification
//!
//! The first line bugreport prints is its banner, so a clean run produces
//! exactly one line and a finding produces exactly two.

use std::io::Write;

use colored::Colorize;

/// Outcome of a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// A report was expected but only the banner came back
    NothingReported { expected: String },
    /// Anything else: wrong report, extra lines, or a report where none was expected
    Mismatch {
        expected: String,
        echoed: Vec<String>,
    },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Write the human-readable result lines for `name`
    pub fn render<W: Write>(&self, name: &str, out: &mut W) -> std::io::Result<()> {
        match self {
            Verdict::Pass => writeln!(out, "{}", "OK.".green()),
            Verdict::NothingReported { expected } => writeln!(
                out,
                "{} {} expected == {} got nothing.",
                "ERROR:".red().bold(),
                name,
                expected
            ),
            Verdict::Mismatch { expected, echoed } => {
                writeln!(out, "{} expected \"{}\" got ", "ERROR:".red().bold(), expected)?;
                for line in echoed {
                    writeln!(out, "\t{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Classify captured stdout lines against the expected prefix
///
/// An empty `expected` only passes on a single line of output; with two or
/// more lines it always fails.
pub fn classify(expected: &str, output: &[String]) -> Verdict {
    if output.len() == 1 {
        return if expected.is_empty() {
            Verdict::Pass
        } else {
            Verdict::NothingReported {
                expected: expected.to_string(),
            }
        };
    }

    let matched = !expected.is_empty()
        && output.len() == 2
        && output[1].starts_with(expected);

    if matched {
        Verdict::Pass
    } else {
        Verdict::Mismatch {
            expected: expected.to_string(),
            echoed: output
                .iter()
                .skip(1)
                .map(|line| line.trim().to_string())
                .collect(),
        }
    }
}
