mod location;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "odyssey-cli")]
#[command(about = "Render location detail pages from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a location and render its detail page
    Location {
        /// Location id, or a `/location/{id}` path
        target: String,
        /// Print the render model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded configuration with secrets redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("odyssey-cli: run `odyssey-cli --help` for usage");
        return Ok(ExitCode::SUCCESS);
    };

    let config = odyssey_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Location { target, json } => {
            let rendered = location::run_location(&config, &target, json).await?;
            Ok(if rendered {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Config => {
            println!("{config:#?}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
