use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::app_config::DEFAULT_CONFIG_PATH;

static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();
static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// How much `cli::output` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// Initialize the global invocation context.
/// If `config` is provided, uses that path; otherwise defaults to
/// `config/kamal-easy.yml`.
pub fn init(config: Option<&str>, verbose: bool, quiet: bool) {
    let path = config
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let _ = CONFIG_PATH.set(path);

    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    let _ = VERBOSITY.set(verbosity);
}

/// Get the configuration file path for this invocation.
pub fn config_path() -> &'static Path {
    CONFIG_PATH
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(DEFAULT_CONFIG_PATH))
}

/// Get the output verbosity, `Normal` if `init` was never called.
pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or(Verbosity::Normal)
}
