use std::collections::BTreeMap;

use crate::config::app_config::EnvironmentSpec;
use crate::core::errors::{KamalEasyError, Result};

/// Which environment an invocation targets.
///
/// Built once from the CLI flags by [`EnvSelector::from_flags`], so a
/// "two environments at once" state cannot exist past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSelector {
    /// No flag given: commands inherit the invoking process environment.
    None,
    Uat,
    Staging,
    Production,
}

impl EnvSelector {
    /// Validate the selector flags. `production` must already fold in the
    /// `--prod`/`--production` alias.
    ///
    /// # Errors
    ///
    /// `ConflictingEnvironmentSelectors` when more than one flag is set.
    pub fn from_flags(uat: bool, staging: bool, production: bool) -> Result<Self> {
        let selected: Vec<&str> = [(production, "production"), (staging, "staging"), (uat, "uat")]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();

        if selected.len() > 1 {
            return Err(KamalEasyError::ConflictingEnvironmentSelectors {
                selected: selected.join(", "),
            });
        }

        Ok(if production {
            Self::Production
        } else if staging {
            Self::Staging
        } else if uat {
            Self::Uat
        } else {
            Self::None
        })
    }

    /// Key of this environment in the `environments` mapping.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Uat => Some("uat"),
            Self::Staging => Some("staging"),
            Self::Production => Some("production"),
        }
    }
}

/// The outcome of environment resolution: an optional environment name,
/// the spec it was loaded from, and the variables to overlay on every
/// external command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedEnvironment {
    pub name: Option<String>,
    pub spec: Option<EnvironmentSpec>,
    pub vars: BTreeMap<String, String>,
}

impl ResolvedEnvironment {
    /// Upper-cased name for status lines, `CURRENT` when no flag was given.
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "CURRENT".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_selects_none() {
        assert_eq!(
            EnvSelector::from_flags(false, false, false).unwrap(),
            EnvSelector::None
        );
    }

    #[test]
    fn single_flag_selects_that_environment() {
        assert_eq!(
            EnvSelector::from_flags(true, false, false).unwrap(),
            EnvSelector::Uat
        );
        assert_eq!(
            EnvSelector::from_flags(false, true, false).unwrap(),
            EnvSelector::Staging
        );
        assert_eq!(
            EnvSelector::from_flags(false, false, true).unwrap(),
            EnvSelector::Production
        );
    }

    #[test]
    fn every_multi_flag_combination_conflicts() {
        let combos = [
            (true, true, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ];

        for (uat, staging, production) in combos {
            let err = EnvSelector::from_flags(uat, staging, production).unwrap_err();
            assert!(
                matches!(err, KamalEasyError::ConflictingEnvironmentSelectors { .. }),
                "expected conflict for {uat}/{staging}/{production}"
            );
        }
    }

    #[test]
    fn conflict_message_names_selected_environments() {
        let err = EnvSelector::from_flags(true, false, true)
            .unwrap_err()
            .to_string();

        assert!(err.contains("production, uat"));
    }

    #[test]
    fn selector_names_match_config_keys() {
        assert_eq!(EnvSelector::None.name(), None);
        assert_eq!(EnvSelector::Uat.name(), Some("uat"));
        assert_eq!(EnvSelector::Staging.name(), Some("staging"));
        assert_eq!(EnvSelector::Production.name(), Some("production"));
    }

    #[test]
    fn label_defaults_to_current() {
        let none = ResolvedEnvironment::default();
        let prod = ResolvedEnvironment {
            name: Some("production".into()),
            ..Default::default()
        };

        assert_eq!(none.label(), "CURRENT");
        assert_eq!(prod.label(), "PRODUCTION");
    }
}
