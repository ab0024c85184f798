//! Terminal reporting for CLI commands.
//!
//! Verdicts and tables go to stdout, the rejection summary to stderr.
//! `NO_COLOR` disables color regardless of `--color`.

use gcflags_engine::{AddressWidth, FlagDescriptor, FlagKey, FlagValue};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Pick the color mode.
///
/// A set `NO_COLOR` always wins. Without it `--color always` and
/// `--color never` are honored, and anything else falls back to
/// terminal detection.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    match flag {
        _ if no_color => ColorChoice::Never,
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Column layout shared by the `list` header and rows.
const ROW_WIDTHS: [usize; 4] = [28, 7, 10, 18];

pub struct Console {
    out: StandardStream,
    err: StandardStream,
}

impl Console {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            out: StandardStream::stdout(choice),
            err: StandardStream::stderr(choice),
        }
    }

    /// `Configuration accepted (64-bit)`
    pub fn accepted(&mut self, width: AddressWidth) {
        paint(&mut self.out, Some(Color::Green), true, "Configuration accepted");
        let _ = writeln!(self.out, " ({}-bit)", width.bits());
    }

    /// One value filled in by ergonomics.
    pub fn ergonomic(&mut self, key: FlagKey, value: FlagValue) {
        paint(
            &mut self.out,
            Some(Color::Cyan),
            false,
            &format!("  ergonomic {} = {}", key, value),
        );
        let _ = writeln!(self.out);
    }

    pub fn rejected(&mut self, count: usize) {
        paint(
            &mut self.err,
            Some(Color::Red),
            true,
            &format!("Configuration rejected: {} flag constraint violation(s)", count),
        );
        let _ = writeln!(self.err);
    }

    pub fn flag_header(&mut self) {
        let line = columns(["FLAG", "KIND", "DEFAULT", "CHECKED"], "MANAGEABLE");
        paint(&mut self.out, None, true, &line);
        let _ = writeln!(self.out);
    }

    /// A descriptor row followed by its indented description.
    pub fn flag_row(&mut self, descriptor: &FlagDescriptor) {
        let line = columns(
            [
                descriptor.name,
                &descriptor.kind.to_string(),
                &descriptor.default.to_string(),
                &descriptor.phase.to_string(),
            ],
            if descriptor.manageable { "yes" } else { "no" },
        );
        let _ = writeln!(self.out, "{}", line);
        paint(
            &mut self.out,
            Some(Color::Cyan),
            false,
            &format!("    {}", descriptor.description),
        );
        let _ = writeln!(self.out);
    }

    /// A bare value, for output meant to be consumed by scripts.
    pub fn raw(&mut self, value: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{}", value);
    }
}

fn columns(cells: [&str; 4], last: &str) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(ROW_WIDTHS) {
        line.push_str(&format!("{:<width$} ", cell, width = width));
    }
    line.push_str(last);
    line
}

fn paint(stream: &mut StandardStream, color: Option<Color>, bold: bool, text: &str) {
    let mut style = ColorSpec::new();
    style.set_fg(color).set_bold(bold);
    let _ = stream.set_color(&style);
    let _ = write!(stream, "{}", text);
    let _ = stream.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_priority() {
        assert_eq!(resolve_color_choice(Some("never")), ColorChoice::Never);
        if std::env::var_os("NO_COLOR").is_some() {
            assert_eq!(resolve_color_choice(Some("always")), ColorChoice::Never);
            assert_eq!(resolve_color_choice(None), ColorChoice::Never);
        } else {
            assert_eq!(resolve_color_choice(Some("always")), ColorChoice::Always);
            assert_eq!(resolve_color_choice(None), ColorChoice::Auto);
        }
    }

    #[test]
    fn test_columns_pad_to_width() {
        let line = columns(["a", "b", "c", "d"], "e");
        assert_eq!(line.len(), 28 + 7 + 10 + 18 + 4 + 1);
        assert!(line.starts_with("a "));
        assert!(line.ends_with(" e"));
    }
}
