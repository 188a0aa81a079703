use std::path::PathBuf;

/// All domain errors for kamal-easy.
///
/// Every variant is fatal for the invocation: it travels up to `main`,
/// which prints it and exits non-zero. Each message names the offending
/// file, environment, component or command.
#[derive(Debug, thiserror::Error)]
pub enum KamalEasyError {
    #[error(
        "Configuration file {path} not found\n\n  \
         Run 'kamal-easy install' to generate one."
    )]
    ConfigNotFound { path: PathBuf },

    #[error(
        "Failed to parse {path}: {detail}\n\n  \
         Expected YAML with 'environments' and 'components' mappings.\n  \
         Run 'kamal-easy install' in an empty directory to see an example."
    )]
    MalformedConfig { path: PathBuf, detail: String },

    #[error(
        "Environment '{name}' not defined in the configuration\n\n  \
         Available environments: {available}"
    )]
    UnknownEnvironment { name: String, available: String },

    #[error(
        "Environment file {path} not found\n\n  \
         Create it with one KEY=value per line, or point 'env_file' elsewhere."
    )]
    EnvironmentFileMissing { path: PathBuf },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected format: KEY=value (one per line).\n  \
         Comments (#) and blank lines are allowed."
    )]
    EnvFileParse { file: PathBuf, detail: String },

    #[error(
        "Cannot target multiple environments simultaneously ({selected})\n\n  \
         Pass only one of --uat, --staging or --prod."
    )]
    ConflictingEnvironmentSelectors { selected: String },

    #[error("Component '{name}' not configured")]
    ComponentNotConfigured { name: String },

    #[error(
        "Component '{component}' has no container_name_pattern\n\n  \
         Add one to its entry so the console can locate the running container."
    )]
    ContainerPatternMissing { component: String },

    #[error("Mandatory file '{file}' missing in {dir}")]
    MandatoryFileMissing { file: PathBuf, dir: PathBuf },

    #[error("Command failed: {command} ({reason})")]
    CommandFailed { command: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KamalEasyError>;
