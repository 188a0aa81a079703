pub mod dry_run_executor;
pub mod shell_executor;
