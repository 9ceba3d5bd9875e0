//! kym CLI
//!
//! Local execution entry point. For AWS Lambda, use `kym-lambda`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kym::{error::Result, models::Config, services::SearchClient};

/// kym - Know Your Meme image lookup
#[derive(Parser, Debug)]
#[command(name = "kym", version, about = "Find the first Know Your Meme image for a query")]
struct Cli {
    /// Path to a TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "kym.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first full-size image URL for a query
    Search {
        /// Search text, used verbatim
        query: String,
    },

    /// Print the User-Agent that searches would send
    UserAgent,

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env_overrides();

    match cli.command {
        Command::Search { query } => {
            config.validate()?;
            let search = SearchClient::new(&config)?;
            match search.search_image(&query).await? {
                Some(url) => println!("{url}"),
                None => println!("None"),
            }
        }

        Command::UserAgent => {
            config.validate()?;
            let search = SearchClient::new(&config)?;
            println!("{}", search.user_agents().current_user_agent().await?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            println!("✓ Config OK");
        }
    }

    Ok(())
}
