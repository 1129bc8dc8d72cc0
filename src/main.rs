//! spinquiz - trivia quiz TUI with a spinning category wheel
//!
//! Run without arguments to launch the TUI, or use subcommands to
//! validate question files and manage configuration.
//!
//! Available as the `sq` command.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use spinquiz::cli::commands::{Cli, Commands};
use spinquiz::cli::{config, validate};
use spinquiz::core::config::Config;
use spinquiz::core::question::QuestionBank;
use spinquiz::error::Result;
use spinquiz::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui(cli.data.as_deref()).await,

        Some(Commands::Validate(mut args)) => {
            // --data and a positional file mean the same thing here.
            if args.file.is_none() {
                args.file = cli.data;
            }
            validate::handle_validate(args)
        }

        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the TUI application
async fn run_tui(data_override: Option<&Path>) -> Result<()> {
    let config = Config::load()?;

    let bank = match data_override.or(config.data_file.as_deref()) {
        Some(path) => QuestionBank::load(path)?,
        None => QuestionBank::bundled()?,
    };

    let mut app = App::new(bank, &config);
    app.run().await
}
