use crate::cli::EnvFlags;
use crate::cli::commands::env_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::deploy_plan::LogOptions;
use crate::core::services::orchestrator::Orchestrator;

/// Execute the `kamal-easy logs` command against the backend.
pub fn execute(options: &LogOptions, flags: EnvFlags, dry_run: bool) -> Result<()> {
    let (config, environment) = env_helpers::load_environment(flags)?;

    output::info(&format!("Fetching logs from {}...", environment.label()));

    Orchestrator::new(&config, &environment, env_helpers::executor(dry_run)).logs(options)
}
