use crate::cli::EnvFlags;
use crate::cli::commands::env_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::orchestrator::Orchestrator;

/// Execute the `kamal-easy console` command.
pub fn execute(flags: EnvFlags, dry_run: bool) -> Result<()> {
    let (config, environment) = env_helpers::load_environment(flags)?;

    output::info(&format!(
        "Connecting to {} Rails Console...",
        environment.label()
    ));

    Orchestrator::new(&config, &environment, env_helpers::executor(dry_run)).console()
}
