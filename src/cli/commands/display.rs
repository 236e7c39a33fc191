//! Shared display helpers for workspace-backed commands.

use serde::Serialize;

use crate::error::{ErrorList, Result};
use crate::ui::UserInterface;

/// Report partial load failures as warnings, one per failure.
///
/// Returns the number of warnings shown so callers can add a summary hint.
pub fn show_load_errors(ui: &mut dyn UserInterface, errors: &ErrorList) -> usize {
    for err in errors.iter() {
        ui.warning(&err.to_string());
    }
    if !errors.is_empty() {
        ui.show_hint(&format!(
            "{} item(s) failed to load; results cover what did load",
            errors.len()
        ));
    }
    errors.len()
}

/// Pretty JSON for `--format json` style output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| anyhow::Error::from(e).into())
}
