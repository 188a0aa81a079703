use std::collections::BTreeMap;
use std::path::Path;

use crate::adapters::executor::dry_run_executor::DryRunExecutor;
use crate::adapters::executor::shell_executor::ShellExecutor;
use crate::cli::EnvFlags;
use crate::cli::{context, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::environment::{EnvSelector, ResolvedEnvironment};
use crate::core::services::env_resolver::EnvResolver;
use crate::core::traits::executor::CommandExecutor;

/// Validate the environment flags, load the configuration and resolve
/// the selected environment.
///
/// Conflicting flags are rejected before the config file is read. Status
/// lines are printed only once resolution has succeeded.
pub fn load_environment(flags: EnvFlags) -> Result<(AppConfig, ResolvedEnvironment)> {
    let selector = EnvSelector::from_flags(flags.uat, flags.staging, flags.prod || flags.production)?;
    let config = AppConfig::load(context::config_path())?;
    let environment = EnvResolver.resolve(selector, &config)?;

    match &environment.spec {
        None => {
            output::info("No environment flag provided. Using current process environment...");
        }
        Some(spec) => {
            output::info(&format!(
                "Loaded configuration from {}",
                spec.env_file.display()
            ));
            output::detail(&format!("{} variable(s) loaded", environment.vars.len()));
            if let Some(credentials) = &spec.credentials_file {
                output::detail(&format!("Credentials file: {}", credentials.display()));
            }
        }
    }

    Ok((config, environment))
}

/// Echoes each command as a verbose detail line before handing it on.
struct Echo<E>(E);

impl<E: CommandExecutor> CommandExecutor for Echo<E> {
    fn run(&self, dir: &Path, vars: &BTreeMap<String, String>, command: &str) -> Result<()> {
        output::detail(&format!("$ {command}  (in {})", dir.display()));
        if !vars.is_empty() {
            let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
            output::detail(&format!("with variables: {}", keys.join(", ")));
        }
        self.0.run(dir, vars, command)
    }
}

static SHELL: Echo<ShellExecutor> = Echo(ShellExecutor);
static DRY_RUN: Echo<DryRunExecutor> = Echo(DryRunExecutor {
    report: output::info,
});

/// Pick the executor for this invocation.
pub fn executor(dry_run: bool) -> &'static dyn CommandExecutor {
    if dry_run { &DRY_RUN } else { &SHELL }
}
