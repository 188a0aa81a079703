/// Component names the orchestrator knows how to drive.
pub const BACKEND: &str = "backend";
pub const FRONTEND: &str = "frontend";

/// One step of a deploy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Backend,
    Frontend,
    /// Reboots the `db` accessory through the backend component.
    DbReboot,
}

impl DeployStep {
    /// Status line printed before the step runs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "Deploying Backend...",
            Self::Frontend => "Deploying Frontend...",
            Self::DbReboot => "Restarting Database...",
        }
    }
}

/// Action flags of `kamal-easy deploy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployTargets {
    pub all: bool,
    pub backend: bool,
    pub frontend: bool,
    pub db: bool,
}

impl DeployTargets {
    /// Expand the flags into steps, always backend, then frontend, then db.
    pub fn plan(self) -> Vec<DeployStep> {
        [
            (self.all || self.backend, DeployStep::Backend),
            (self.all || self.frontend, DeployStep::Frontend),
            (self.all || self.db, DeployStep::DbReboot),
        ]
        .into_iter()
        .filter_map(|(on, step)| on.then_some(step))
        .collect()
    }
}

/// Options of `kamal-easy logs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub follow: bool,
    pub lines: u32,
    pub grep: Option<String>,
}
