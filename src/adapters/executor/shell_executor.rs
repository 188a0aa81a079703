use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::core::errors::{KamalEasyError, Result};
use crate::core::traits::executor::CommandExecutor;

/// Executor that hands each command to the system shell.
///
/// stdin, stdout and stderr are inherited so deploy output and
/// interactive consoles stream straight to the terminal.
pub struct ShellExecutor;

impl ShellExecutor {
    fn shell(command: &str) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C");
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c");
            cmd
        };
        cmd.arg(command);
        cmd
    }
}

impl CommandExecutor for ShellExecutor {
    fn run(&self, dir: &Path, vars: &BTreeMap<String, String>, command: &str) -> Result<()> {
        let status = Self::shell(command)
            .current_dir(dir)
            .envs(vars)
            .status()
            .map_err(|e| KamalEasyError::CommandFailed {
                command: command.to_string(),
                reason: format!("could not start in {}: {e}", dir.display()),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(KamalEasyError::CommandFailed {
                command: command.to_string(),
                reason: describe_status(status),
            })
        }
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
