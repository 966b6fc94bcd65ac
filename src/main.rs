use clap::Parser;
use tracing::debug;

use surebet::adapter::inbound::cli::command::{Cli, Commands};
use surebet::adapter::inbound::cli::config::load_config;
use surebet::adapter::inbound::cli::output::{self, OutputConfig};
use surebet::adapter::inbound::cli::run;
use surebet::infrastructure::config::LoggingConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    logging_config(&cli).with_verbosity(cli.verbose).init();
    debug!(command = ?cli.command, "surebet starting");

    if let Err(e) = run(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Logging section of the config the command will use.
///
/// Config errors are reported by the command itself, so a broken file
/// falls back to default logging here.
fn logging_config(cli: &Cli) -> LoggingConfig {
    let path = match &cli.command {
        Commands::Scan(args) => args.config.config.as_deref(),
        Commands::Analyze(args) => args.config.config.as_deref(),
        Commands::Sports(args) => args.config.as_deref(),
        Commands::Config(_) => return LoggingConfig::default(),
    };
    load_config(path)
        .map(|config| config.logging)
        .unwrap_or_default()
}
