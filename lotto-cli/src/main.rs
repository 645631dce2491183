mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use lotto_core::DuplicatePolicy;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Mock lottery: create, buy tickets, pick a winner")]
#[command(version)]
struct Cli {
    /// Data directory for the configuration file
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Let one address buy several tickets in the same lottery
    #[arg(long, global = true)]
    allow_duplicates: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Play {
        /// Ask for the buyer address on every purchase
        #[arg(long)]
        prompt_address: bool,
    },
    /// Run one scripted lottery round
    Simulate {
        /// Ticket price
        #[arg(short, long)]
        price: String,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Participant addresses, one ticket each
        addresses: Vec<String>,
    },
    /// Show the effective configuration
    Config {
        /// Save it to the data directory
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;

    let mut config = CliConfig::load(&data_dir).await;
    if cli.allow_duplicates {
        config.lottery.duplicate_policy = DuplicatePolicy::Allow;
    }

    let command = cli.command.unwrap_or(Commands::Play {
        prompt_address: false,
    });

    let result = match command {
        Commands::Play { prompt_address } => {
            commands::run_session(config.lottery.clone(), prompt_address)
        }
        Commands::Simulate {
            price,
            seed,
            addresses,
        } => commands::run_simulation(config.lottery.clone(), &price, &addresses, seed).map(|_| ()),
        Commands::Config { write } => commands::handle_config_command(&config, write).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
