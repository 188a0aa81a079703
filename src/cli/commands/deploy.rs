use crate::cli::EnvFlags;
use crate::cli::commands::env_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::deploy_plan::DeployTargets;
use crate::core::services::orchestrator::Orchestrator;

/// Execute the `kamal-easy deploy` command.
///
/// Runs the selected steps strictly in backend, frontend, database order
/// and stops at the first failure.
pub fn execute(targets: DeployTargets, flags: EnvFlags, dry_run: bool) -> Result<()> {
    let plan = targets.plan();
    let (config, environment) = env_helpers::load_environment(flags)?;

    output::header(&format!("Deploying to {}", environment.label()));

    let executor = env_helpers::executor(dry_run);
    Orchestrator::new(&config, &environment, executor)
        .deploy(&plan, |step| output::info(step.label()))?;

    output::success(&format!("{} step(s) completed", plan.len()));
    Ok(())
}
