use std::collections::BTreeMap;
use std::path::Path;

use crate::core::errors::Result;
use crate::core::traits::executor::CommandExecutor;

/// Executor for `--dry-run`: reports what would run and always succeeds.
pub struct DryRunExecutor {
    /// Receives one line per command.
    pub report: fn(&str),
}

impl CommandExecutor for DryRunExecutor {
    fn run(&self, dir: &Path, _vars: &BTreeMap<String, String>, command: &str) -> Result<()> {
        (self.report)(&format!("[dry-run] in {}: {command}", dir.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static REPORTED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn record(line: &str) {
        REPORTED.lock().unwrap().push(line.to_string());
    }

    #[test]
    fn reports_command_and_directory_without_running() {
        let executor = DryRunExecutor { report: record };

        executor
            .run(Path::new("web"), &BTreeMap::new(), "exit 1")
            .unwrap();

        let reported = REPORTED.lock().unwrap();
        assert_eq!(reported.as_slice(), ["[dry-run] in web: exit 1"]);
    }
}
