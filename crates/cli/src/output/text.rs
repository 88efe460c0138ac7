//! Text output formatter.
//!
//! Failures go to stderr:
//! ```text
//! <flavor>: FAIL
//!   <kind>: <artifact>
//!     <detail>
//! ```
//! followed by a summary line on stdout.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::report::{CaseResult, VerificationReport};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    stdout: W,
    stderr: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to the process streams.
    pub fn new(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::with_writers(
            StandardStream::stdout(color_choice),
            StandardStream::stderr(color_choice),
            options,
        )
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn with_writers(stdout: W, stderr: W, options: FormatOptions) -> Self {
        Self {
            stdout,
            stderr,
            options,
        }
    }

    /// Write every case followed by the summary.
    pub fn write_report(&mut self, report: &VerificationReport) -> std::io::Result<()> {
        for case in &report.cases {
            self.write_case(case)?;
        }
        self.stderr.flush()?;
        self.write_summary(report)
    }

    /// Write a single case result.
    pub fn write_case(&mut self, case: &CaseResult) -> std::io::Result<()> {
        match &case.failure {
            None if self.options.show_passed => {
                let out = &mut self.stdout;
                out.set_color(&scheme::flavor())?;
                write!(out, "{}", case.flavor)?;
                out.reset()?;
                write!(out, ": ")?;
                out.set_color(&scheme::pass())?;
                write!(out, "PASS")?;
                out.reset()?;
                writeln!(out, " ({}ms)", case.duration_ms)
            }
            None => Ok(()),
            Some(failure) => {
                let err = &mut self.stderr;
                err.set_color(&scheme::flavor())?;
                write!(err, "{}", case.flavor)?;
                err.reset()?;
                write!(err, ": ")?;
                err.set_color(&scheme::fail())?;
                write!(err, "FAIL")?;
                err.reset()?;
                writeln!(err)?;

                write!(err, "  ")?;
                err.set_color(&scheme::kind())?;
                write!(err, "{}", failure.kind())?;
                err.reset()?;
                write!(err, ": ")?;
                err.set_color(&scheme::path())?;
                write!(err, "{}", case.artifact.display())?;
                err.reset()?;
                writeln!(err)?;

                writeln!(err, "    {}", failure.detail())
            }
        }
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, report: &VerificationReport) -> std::io::Result<()> {
        let passed = report.passed_count();
        let failed = report.failed_count();
        let plural = if passed == 1 { "" } else { "s" };

        if failed == 0 {
            writeln!(self.stdout, "{} flavor{} passed", passed, plural)?;
        } else {
            writeln!(
                self.stdout,
                "{} flavor{} passed, {} failed",
                passed, plural, failed
            )?;
        }
        self.stdout.flush()
    }

    /// Consume the formatter, returning (stdout, stderr).
    pub fn into_writers(self) -> (W, W) {
        (self.stdout, self.stderr)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
