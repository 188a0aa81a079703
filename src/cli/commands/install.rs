use crate::cli::context::{self, Verbosity};
use crate::cli::output;
use crate::core::errors::Result;

/// Starter configuration written by `kamal-easy install`.
pub const CONFIG_TEMPLATE: &str = r#"environments:
  uat:
    env_file: .env.uat
    credentials_file: config/credentials/uat.yml.enc
  staging:
    env_file: .env.staging
    credentials_file: config/credentials/staging.yml.enc
  production:
    env_file: .env.production
    credentials_file: config/credentials/production.yml.enc

components:
  backend:
    path: .
    kamal_cmd: "bundle exec kamal"
    container_name_pattern: "your-app-backend-api"
    mandatory_files:
      - config/deploy.yml
      - Dockerfile
  frontend:
    path: ../your-app-frontend
    kamal_cmd: "kamal"
    mandatory_files:
      - config/deploy.yml
"#;

/// Execute the `kamal-easy install` command.
///
/// Writes the starter configuration unless the file already exists; an
/// existing file is never touched.
pub fn execute() -> Result<()> {
    let config_path = context::config_path();

    if config_path.exists() {
        output::warning(&format!("{} already exists.", config_path.display()));
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, CONFIG_TEMPLATE)?;
    output::success(&format!("Created {}", config_path.display()));

    if context::verbosity() != Verbosity::Quiet {
        println!("\n  Next steps:");
        println!("     1. Point each component's 'path' at its Kamal project");
        println!("     2. Create .env.uat, .env.staging and .env.production");
        println!("     3. Run 'kamal-easy deploy --all --uat'");
    }

    Ok(())
}
