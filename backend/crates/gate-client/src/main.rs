//! gate - command-line front end for gate-server
//!
//! # Examples
//!
//! ```bash
//! gate register --email a@b.com --password secret1
//! gate dashboard --pretty
//! gate logout
//! ```

use gate_client::cli::Cli;
use gate_client::{
    Client, ClientSettings, CommandResult, LocalStorage, SessionContext, commands, logger,
};

use gate_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose
        && let Err(e) = logger::initialize(LevelFilter::Debug)
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CommandResult<String> {
    let config = Config::load()?;
    config.client.validate()?;

    let settings = ClientSettings::resolve(cli.server, cli.session_dir, &config)?;
    let client = Client::new(&settings.server_url);
    let storage = LocalStorage::new(settings.session_dir);
    let mut session = SessionContext::initialize(client, storage);

    let value = commands::execute(cli.command, &mut session).await?;
    commands::render(&value, cli.pretty)
}
