use crate::config::app_config::{AppConfig, ComponentSpec};
use crate::core::errors::{KamalEasyError, Result};
use crate::core::models::deploy_plan::{BACKEND, DeployStep, FRONTEND, LogOptions};
use crate::core::models::environment::ResolvedEnvironment;
use crate::core::services::precheck::PrecheckValidator;
use crate::core::traits::executor::CommandExecutor;

/// Sequences external tool invocations for the configured components.
///
/// Every operation is fail-fast: the first error is returned as-is and
/// nothing after it runs. Steps already completed are not rolled back.
pub struct Orchestrator<'a, E: CommandExecutor + ?Sized> {
    config: &'a AppConfig,
    environment: &'a ResolvedEnvironment,
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Orchestrator<'a, E> {
    pub fn new(config: &'a AppConfig, environment: &'a ResolvedEnvironment, executor: &'a E) -> Self {
        Self {
            config,
            environment,
            executor,
        }
    }

    /// Run `plan` in order, calling `announce` before each step.
    pub fn deploy(&self, plan: &[DeployStep], mut announce: impl FnMut(DeployStep)) -> Result<()> {
        for &step in plan {
            announce(step);
            match step {
                DeployStep::Backend => self.deploy_component(BACKEND)?,
                DeployStep::Frontend => self.deploy_component(FRONTEND)?,
                DeployStep::DbReboot => self.reboot_db()?,
            }
        }
        Ok(())
    }

    /// Stream the backend application logs.
    pub fn logs(&self, options: &LogOptions) -> Result<()> {
        let backend = self.component(BACKEND)?;
        self.run(backend, &logs_command(backend, options))
    }

    /// Open a Rails console inside the running backend container.
    pub fn console(&self) -> Result<()> {
        let backend = self.component(BACKEND)?;
        let command = console_command(backend).ok_or_else(|| {
            KamalEasyError::ContainerPatternMissing {
                component: BACKEND.to_string(),
            }
        })?;
        self.run(backend, &command)
    }

    fn deploy_component(&self, name: &str) -> Result<()> {
        let spec = self.component(name)?;
        PrecheckValidator.validate(spec, &spec.path)?;
        self.run(spec, &format!("{} deploy", spec.kamal_cmd))
    }

    /// The `db` accessory is managed from the backend's Kamal setup.
    fn reboot_db(&self) -> Result<()> {
        let backend = self.component(BACKEND)?;
        self.run(backend, &format!("{} accessory reboot db", backend.kamal_cmd))
    }

    fn component(&self, name: &str) -> Result<&'a ComponentSpec> {
        self.config
            .component(name)
            .ok_or_else(|| KamalEasyError::ComponentNotConfigured {
                name: name.to_string(),
            })
    }

    fn run(&self, spec: &ComponentSpec, command: &str) -> Result<()> {
        self.executor
            .run(&spec.path, &self.environment.vars, command)
    }
}

/// Build `{kamal_cmd} app logs --lines N [--follow] [--grep 'PATTERN']`.
pub fn logs_command(spec: &ComponentSpec, options: &LogOptions) -> String {
    let mut command = format!("{} app logs --lines {}", spec.kamal_cmd, options.lines);
    if options.follow {
        command.push_str(" --follow");
    }
    if let Some(pattern) = &options.grep {
        command.push_str(" --grep ");
        command.push_str(&single_quote(pattern));
    }
    command
}

/// Build the remote exec that attaches a console to the first container
/// matching `container_name_pattern`. `None` when no pattern is configured.
pub fn console_command(spec: &ComponentSpec) -> Option<String> {
    let pattern = spec.container_name_pattern.as_deref()?;
    Some(format!(
        "{} server exec -i 'docker exec -it $(docker ps -q -f name={pattern} | head -n1) bin/rails console'",
        spec.kamal_cmd
    ))
}

/// Wrap `value` in single quotes for a POSIX shell. Embedded quotes become
/// `'\''`, so the value always arrives as one literal argument.
fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
