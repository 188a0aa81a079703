pub mod commands;
pub mod context;
pub mod output;

use clap::{ArgGroup, Args, Parser, Subcommand};

/// Deploy multi-component Kamal apps across environments.
#[derive(Parser, Debug)]
#[command(name = "kamal-easy", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub env: EnvFlags,

    /// Path to alternative config file
    #[arg(long, global = true, env = "KAMAL_EASY_CONFIG")]
    pub config: Option<String>,

    /// Print the commands that would run without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Environment selectors shared by every command. At most one may be set.
#[derive(Args, Debug, Clone, Copy)]
pub struct EnvFlags {
    /// Run command in UAT environment
    #[arg(long, global = true)]
    pub uat: bool,

    /// Run command in Staging environment
    #[arg(long, global = true)]
    pub staging: bool,

    /// Run command in Production environment
    #[arg(long, global = true)]
    pub prod: bool,

    /// Alias for --prod
    #[arg(long, global = true)]
    pub production: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the configuration file
    Install,

    /// Deploy specific components or everything
    #[command(group(
        ArgGroup::new("targets")
            .required(true)
            .multiple(true)
            .args(["all", "backend", "frontend", "db"])
    ))]
    Deploy {
        /// Deploy all components (backend, frontend, then database restart)
        #[arg(long)]
        all: bool,
        /// Deploy backend
        #[arg(long)]
        backend: bool,
        /// Deploy frontend
        #[arg(long)]
        frontend: bool,
        /// Restart database
        #[arg(long)]
        db: bool,
    },

    /// View remote logs
    Logs {
        /// Follow logs
        #[arg(short, long)]
        follow: bool,
        /// Number of lines
        #[arg(short = 'n', long, default_value_t = 100)]
        lines: u32,
        /// Filter pattern
        #[arg(short, long)]
        grep: Option<String>,
    },

    /// Access remote Rails console
    #[command(visible_alias = "c", alias = "rails_console")]
    Console,
}
