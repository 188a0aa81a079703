mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use crate::core::models::deploy_plan::{DeployTargets, LogOptions};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.config.as_deref(), args.verbose, args.quiet);

    let result = match &args.command {
        Commands::Install => cli::commands::install::execute(),
        Commands::Deploy {
            all,
            backend,
            frontend,
            db,
        } => {
            let targets = DeployTargets {
                all: *all,
                backend: *backend,
                frontend: *frontend,
                db: *db,
            };
            cli::commands::deploy::execute(targets, args.env, args.dry_run)
        }
        Commands::Logs {
            follow,
            lines,
            grep,
        } => {
            let options = LogOptions {
                follow: *follow,
                lines: *lines,
                grep: grep.clone(),
            };
            cli::commands::logs::execute(&options, args.env, args.dry_run)
        }
        Commands::Console => cli::commands::console::execute(args.env, args.dry_run),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
