mod gateway;
mod i18n;

use cargotrack_channels::telegram::TelegramChannel;
use cargotrack_core::config;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "cargotrack",
    version,
    about = "Telegram bot for shipment tracking lookups"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check configuration and dataset readiness.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            // Missing bot token is the one fatal startup error.
            let cfg = config::load(&cli.config)?;
            let channel = Arc::new(TelegramChannel::new(cfg.bot.clone()));
            let gw = gateway::Gateway::new(channel, &cfg);

            println!("cargotrack — Starting bot...");
            if let Err(e) = gw.run().await {
                // Pause briefly and restart the intake loop once. A second
                // consecutive failure propagates.
                error!("gateway failed: {e}; restarting in 5s");
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                gw.run().await?;
            }
        }
        Commands::Status => {
            println!("cargotrack — Status Check\n");
            println!("Config: {}", cli.config);
            match config::load(&cli.config) {
                Ok(cfg) => {
                    println!("  bot token: configured");
                    println!("  admins: {}", cfg.bot.admins.len());
                    let dataset = if cfg.store.csv_path().exists() {
                        "csv cache present"
                    } else if cfg.store.xlsx_path().exists() {
                        "xlsx source present (converted on first lookup)"
                    } else {
                        "missing (lookups will return not found)"
                    };
                    println!("  dataset: {dataset}");
                }
                Err(e) => println!("  {e}"),
            }
        }
    }

    Ok(())
}
