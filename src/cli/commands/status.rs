//! Status command implementation.
//!
//! The `masonry status` command lists every `component@control` claim with a
//! given implementation status.

use std::path::{Path, PathBuf};

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::config::Layout;
use crate::error::Result;
use crate::inventory::find_implementation_status_with;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_load_errors, to_json};

/// The status command implementation.
pub struct StatusCommand {
    root: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command over the workspace at `root`.
    pub fn new(root: &Path, args: StatusArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = find_implementation_status_with(
            self.args.workspace.certification_name(),
            &self.root,
            &self.args.implementation_status,
            &Layout::default(),
        )?;
        show_load_errors(ui, &report.load_errors);

        if self.args.format == OutputFormat::Json {
            ui.message(&to_json(&report)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Implementation status: {}", report.status));
        if report.matches.is_empty() {
            ui.message(&format!(
                "No controls with implementation status {}",
                report.status
            ));
        }
        for key in report.sorted_keys() {
            ui.message(key);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::WorkspaceArgs;
    use crate::cli::commands::test_workspace;
    use crate::ui::MockUI;

    fn args(status: &str, format: OutputFormat) -> StatusArgs {
        StatusArgs {
            workspace: WorkspaceArgs {
                certification: Some("LATO".to_string()),
                opencontrol: PathBuf::from("unused"),
            },
            implementation_status: status.to_string(),
            format,
        }
    }

    #[test]
    fn lists_matching_claims() {
        let temp = test_workspace();
        let mut ui = MockUI::new();
        StatusCommand::new(temp.path(), args("partial", OutputFormat::Human))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.headers(), ["Implementation status: partial"]);
        assert_eq!(ui.messages(), ["EC2@CM-2", "Legacy@AU-1"]);
    }

    #[test]
    fn reports_no_matches() {
        let temp = test_workspace();
        let mut ui = MockUI::new();
        StatusCommand::new(temp.path(), args("planned", OutputFormat::Human))
            .execute(&mut ui)
            .unwrap();
        assert!(ui.has_message("No controls with implementation status planned"));
    }

    #[test]
    fn json_output_carries_claims() {
        let temp = test_workspace();
        let mut ui = MockUI::new();
        StatusCommand::new(temp.path(), args("complete", OutputFormat::Json))
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["status"], "complete");
        assert_eq!(value["matches"][0]["key"], "EC2@AC-3");
        assert_eq!(value["matches"][0]["claim"]["control_key"], "AC-3");
        assert!(value.get("load_errors").is_none());
    }
}
