//! Configgen CLI - generate device configurations with AI.YOU.

use clap::Parser;
use configgen_cli::commands;
use configgen_cli::{logging, Cli, Command, Config, Formatter, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> configgen_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.debug, cli.quiet);

    // Load config file, then let flags override it
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config);

    let formatter = Formatter::new(settings.color);

    match cli.command {
        Command::Generate(args) => {
            commands::execute_generate(args, &settings, &formatter).await?;
        }
    }

    Ok(())
}
