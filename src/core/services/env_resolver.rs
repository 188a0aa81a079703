use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::config::app_config::AppConfig;
use crate::core::errors::{KamalEasyError, Result};
use crate::core::models::environment::{EnvSelector, ResolvedEnvironment};

/// Resolves the selected environment into the variables to inject.
pub struct EnvResolver;

impl EnvResolver {
    /// Resolve `selector` against `config`.
    ///
    /// `EnvSelector::None` never touches the file system and always yields
    /// an empty variable map. Otherwise the environment's spec is looked up
    /// once and returned alongside the variables.
    ///
    /// # Errors
    ///
    /// - `UnknownEnvironment` if the environment is not in the config.
    /// - `EnvironmentFileMissing` if its `env_file` does not exist.
    /// - `EnvFileParse` if the file is not valid `KEY=value` content.
    pub fn resolve(&self, selector: EnvSelector, config: &AppConfig) -> Result<ResolvedEnvironment> {
        let Some(name) = selector.name() else {
            return Ok(ResolvedEnvironment::default());
        };

        let spec = config.env_config(name)?;
        if !spec.env_file.exists() {
            return Err(KamalEasyError::EnvironmentFileMissing {
                path: spec.env_file.clone(),
            });
        }

        let vars = DotenvParser.parse_file(&spec.env_file)?.into_vars();

        Ok(ResolvedEnvironment {
            name: Some(name.to_string()),
            spec: Some(spec.clone()),
            vars,
        })
    }
}
