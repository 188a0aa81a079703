pub mod deploy_plan;
pub mod env_file;
pub mod environment;
