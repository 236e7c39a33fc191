//! List command implementation.
//!
//! The `masonry list` command shows what a workspace load produced:
//! components, standards, and `covered_by` entries that point nowhere.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::Layout;
use crate::error::Result;
use crate::inventory::resolve_certification;
use crate::models::ComponentSchema;
use crate::ui::{Table, UserInterface};
use crate::workspace::{Workspace, WorkspaceLoader};

use super::dispatcher::{Command, CommandResult};
use super::display::show_load_errors;

/// The list command implementation.
pub struct ListCommand {
    root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command over the workspace at `root`.
    pub fn new(root: &Path, args: ListArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    fn show_components(&self, ui: &mut dyn UserInterface, workspace: &Workspace) {
        let components = workspace.components();
        ui.show_header(&format!("Components ({})", components.len()));
        if components.is_empty() {
            ui.message("No components loaded");
            return;
        }

        let mut table = Table::new(["Key", "Name", "Version", "Claims"]);
        for component in &components {
            table.add_row([
                component.key().to_string(),
                component.name().to_string(),
                component.version().to_string(),
                component.claims().len().to_string(),
            ]);
        }
        ui.message(&table.render());
    }

    fn show_standards(&self, ui: &mut dyn UserInterface, workspace: &Workspace) {
        let standards = workspace.standards();
        ui.show_header(&format!("Standards ({})", standards.len()));
        if standards.is_empty() {
            ui.message("No standards loaded");
            return;
        }

        let mut table = Table::new(["Name", "Controls"]);
        for standard in &standards {
            table.add_row([
                standard.key().to_string(),
                standard.control_count().to_string(),
            ]);
        }
        ui.message(&table.render());
    }

    fn show_unresolved(&self, ui: &mut dyn UserInterface, workspace: &Workspace) {
        for unresolved in workspace.unresolved_covered_by() {
            let target = unresolved
                .covered_by
                .resolved_component(&unresolved.owner)
                .to_string();
            let reason = if unresolved.missing_component {
                format!("component {} is not loaded", target)
            } else {
                format!(
                    "component {} has no verification {}",
                    target, unresolved.covered_by.verification_key
                )
            };
            ui.warning(&format!(
                "{} claims {}@{} covered by {}: {}",
                unresolved.owner,
                unresolved.standard_key,
                unresolved.control_key,
                unresolved.covered_by.verification_key,
                reason
            ));
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let layout = Layout::default();
        let certification = resolve_certification(
            &self.root,
            self.args.workspace.certification_name(),
            &layout,
        )?;
        let workspace = WorkspaceLoader::new(&self.root)
            .layout(layout)
            .certification(certification)
            .load()?;

        show_load_errors(ui, workspace.load_errors());
        self.show_components(ui, &workspace);
        self.show_standards(ui, &workspace);
        self.show_unresolved(ui, &workspace);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::WorkspaceArgs;
    use crate::cli::commands::test_workspace;
    use crate::ui::MockUI;

    fn args() -> ListArgs {
        ListArgs {
            workspace: WorkspaceArgs {
                certification: Some("LATO".to_string()),
                opencontrol: PathBuf::from("unused"),
            },
        }
    }

    #[test]
    fn renders_component_and_standard_tables() {
        let temp = test_workspace();
        let mut ui = MockUI::new();
        let result = ListCommand::new(temp.path(), args())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["Components (2)", "Standards (1)"]);

        let components = &ui.messages()[0];
        let rows: Vec<&str> = components.lines().collect();
        assert!(rows[3].contains("ec2") && rows[3].contains("3.1.0") && rows[3].contains("2"));
        assert!(rows[4].contains("legacy") && rows[4].contains("2.0.0"));

        assert!(ui.messages()[1].contains("NIST-800-53"));
        assert!(ui.messages()[1].contains("│ 4 "));
    }

    #[test]
    fn warns_about_dangling_covered_by() {
        let temp = test_workspace();
        let mut ui = MockUI::new();
        ListCommand::new(temp.path(), args())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(
            ui.warnings()[0],
            "ec2 claims NIST-800-53@CM-2 covered by audit: component s3 is not loaded"
        );
    }

    #[test]
    fn empty_workspace_lists_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("certifications")).unwrap();
        std::fs::write(
            temp.path().join("certifications/LATO.yaml"),
            "name: LATO\nstandards: {}\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        ListCommand::new(temp.path(), args())
            .execute(&mut ui)
            .unwrap();
        assert_eq!(
            ui.messages(),
            ["No components loaded", "No standards loaded"]
        );
    }
}
