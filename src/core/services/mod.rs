pub mod env_resolver;
pub mod orchestrator;
pub mod precheck;
