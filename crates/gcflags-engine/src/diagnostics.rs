//! Diagnostic output for rejected values.
//!
//! A rejection reported with `verbose` set is handed to a [`DiagnosticSink`].
//! The default sink writes one line per violation to stderr.

use crate::error::ConstraintViolation;
use parking_lot::Mutex;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Receiver of constraint diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report one rejected value.
    fn emit(&self, violation: &ConstraintViolation);
}

/// Writes `error: <message>` lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct StderrSink {
    choice: ColorChoice,
}

impl StderrSink {
    /// Sink with an explicit color choice.
    pub fn new(choice: ColorChoice) -> Self {
        Self { choice }
    }

    /// Sink that colors only when stderr is a terminal and `NO_COLOR` is unset.
    pub fn auto() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::new(ColorChoice::Never)
        } else {
            Self::new(ColorChoice::Auto)
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::auto()
    }
}

impl DiagnosticSink for StderrSink {
    fn emit(&self, violation: &ConstraintViolation) {
        let mut stderr = StandardStream::stderr(self.choice);
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        let _ = stderr.set_color(&spec);
        let _ = write!(stderr, "error:");
        let _ = stderr.reset();
        let _ = writeln!(stderr, " {}", violation.message);
    }
}

/// Keeps diagnostics in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, violation: &ConstraintViolation) {
        self.lines.lock().push(violation.message.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagKey;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.emit(&ConstraintViolation::new(FlagKey::NewSize, "first"));
        sink.emit(&ConstraintViolation::new(FlagKey::NewSize, "second"));
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }
}
