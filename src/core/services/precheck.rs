use std::path::Path;

use crate::config::app_config::ComponentSpec;
use crate::core::errors::{KamalEasyError, Result};

/// Verifies a component's mandatory files before anything is run for it.
pub struct PrecheckValidator;

impl PrecheckValidator {
    /// Check each of `spec.mandatory_files` under `working_dir`, in order.
    ///
    /// Paths are joined onto `working_dir` rather than changing the process
    /// directory. Stops at the first missing file.
    pub fn validate(&self, spec: &ComponentSpec, working_dir: &Path) -> Result<()> {
        for file in &spec.mandatory_files {
            if !working_dir.join(file).exists() {
                return Err(KamalEasyError::MandatoryFileMissing {
                    file: file.clone(),
                    dir: working_dir.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}
