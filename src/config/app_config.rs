use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{KamalEasyError, Result};

/// Default location of the configuration file, relative to the
/// directory kamal-easy is invoked from.
pub const DEFAULT_CONFIG_PATH: &str = "config/kamal-easy.yml";

/// Top-level configuration read from `config/kamal-easy.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    environments: BTreeMap<String, EnvironmentSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    components: BTreeMap<String, ComponentSpec>,
}

impl AppConfig {
    /// Load the configuration from `path`.
    ///
    /// A missing file is never replaced by defaults: the user has to run
    /// `kamal-easy install` first.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KamalEasyError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse configuration content. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(KamalEasyError::MalformedConfig {
                path: path.to_path_buf(),
                detail: "file is empty".into(),
            });
        }
        serde_yaml::from_str(content).map_err(|e| KamalEasyError::MalformedConfig {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    pub fn environments(&self) -> &BTreeMap<String, EnvironmentSpec> {
        &self.environments
    }

    pub fn components(&self) -> &BTreeMap<String, ComponentSpec> {
        &self.components
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&ComponentSpec> {
        self.components().get(name)
    }

    /// Look up an environment by name, failing when it is not defined.
    pub fn env_config(&self, name: &str) -> Result<&EnvironmentSpec> {
        self.environments()
            .get(name)
            .ok_or_else(|| KamalEasyError::UnknownEnvironment {
                name: name.to_string(),
                available: self.available_environments(),
            })
    }

    fn available_environments(&self) -> String {
        if self.environments.is_empty() {
            "(none)".to_string()
        } else {
            self.environments
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// An entry in `environments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvironmentSpec {
    pub env_file: PathBuf,
    /// Not interpreted; surfaced in verbose output only.
    pub credentials_file: Option<PathBuf>,
}

/// An entry in `components`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSpec {
    /// Working directory, relative to the invocation directory or absolute.
    pub path: PathBuf,
    /// Prefix for every invocation of the external tool (e.g. `bundle exec kamal`).
    pub kamal_cmd: String,
    pub container_name_pattern: Option<String>,
    /// Files that must exist under `path` before deploying.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mandatory_files: Vec<PathBuf>,
}

/// Treat an explicit YAML `null` (e.g. `components:` with nothing below)
/// the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
