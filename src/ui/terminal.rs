//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, MasonryTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Report output goes to stdout. Warnings, errors, headers, and hints go to
/// stderr so piped reports stay clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: MasonryTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MasonryTheme::new()
        } else {
            MasonryTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn item(&mut self, key: &str, detail: &str) {
        if self.mode.shows_status() {
            writeln!(
                self.out,
                "{}  {}",
                self.theme.key.apply_to(key),
                self.theme.dim.apply_to(detail)
            )
            .ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_decorations() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decorations() {
            writeln!(self.err, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_decorations() {
            writeln!(self.err, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }
}
