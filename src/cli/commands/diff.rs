//! Diff command implementation.
//!
//! The `masonry diff` command prints the required controls of a
//! certification that no component satisfies.

use std::path::{Path, PathBuf};

use crate::cli::args::{DiffArgs, OutputFormat};
use crate::config::Layout;
use crate::error::Result;
use crate::inventory::{compute_gap_analysis_with, GapAnalysis};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_load_errors, to_json};

/// The diff command implementation.
pub struct DiffCommand {
    root: PathBuf,
    args: DiffArgs,
}

impl DiffCommand {
    /// Create a new diff command over the workspace at `root`.
    pub fn new(root: &Path, args: DiffArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    fn show_human(&self, ui: &mut dyn UserInterface, analysis: &GapAnalysis) {
        let details = ui.output_mode().shows_details();

        ui.message(&format!(
            "\nNumber of missing controls: {}\n",
            analysis.missing_count()
        ));
        for key in analysis.sorted_keys() {
            let control = &analysis.missing_controls()[key];
            if details && !control.name.is_empty() {
                ui.item(key, &control.name);
            } else {
                ui.message(key);
            }
        }
        if analysis.missing_count() == 0 {
            ui.success(&format!(
                "Every control required by {} is satisfied",
                analysis.certification()
            ));
        }
    }
}

impl Command for DiffCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let analysis = compute_gap_analysis_with(
            self.args.workspace.certification_name(),
            &self.root,
            &Layout::default(),
        )?;

        show_load_errors(ui, analysis.load_errors());

        match self.args.format {
            OutputFormat::Human => self.show_human(ui, &analysis),
            OutputFormat::Json => ui.message(&to_json(&analysis.report())?),
        }

        Ok(CommandResult::success())
    }
}
