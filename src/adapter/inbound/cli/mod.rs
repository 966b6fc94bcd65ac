//! CLI module graph and command dispatch.

pub mod analyze;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod report;
pub mod scan;
pub mod sports;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;

/// Run the parsed command.
pub async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Scan(args) => scan::execute(args).await,
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Sports(args) => sports::execute(args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
    }
}
