//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing reports to stdout and diagnostics to stderr
//! - [`MockUI`] capturing everything for assertions
//! - [`Table`] for aligned listings
//!
//! # Example
//!
//! ```
//! use masonry::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Number of missing controls: 0");
//! ui.warning("Component: ec2 exists!");
//! assert!(ui.has_warning("ec2"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, MasonryTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Report output. Shown in every mode except silent.
    fn message(&mut self, msg: &str);

    /// Report a keyed line with a dimmed detail, e.g. a control key and its
    /// name.
    fn item(&mut self, key: &str, detail: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);
}
