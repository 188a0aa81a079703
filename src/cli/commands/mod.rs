pub mod console;
pub mod deploy;
pub mod env_helpers;
pub mod install;
pub mod logs;
