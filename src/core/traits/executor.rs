use std::collections::BTreeMap;
use std::path::Path;

use crate::core::errors::Result;

/// Port for running one external command on behalf of a component.
///
/// Implementations live in `adapters::executor` (e.g. ShellExecutor,
/// DryRunExecutor). The working directory applies to that single command
/// only; the caller's process state is left untouched.
pub trait CommandExecutor {
    /// Run `command` in `dir` with `vars` overlaid on the inherited
    /// environment (overlay wins on collision).
    ///
    /// # Errors
    ///
    /// `CommandFailed` if the command cannot start or exits unsuccessfully.
    fn run(&self, dir: &Path, vars: &BTreeMap<String, String>, command: &str) -> Result<()>;
}
