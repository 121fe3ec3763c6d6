use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod identity;
mod location;
mod send;
mod transaction_api;

#[derive(Debug, Parser)]
#[command(name = "payshield-cli")]
#[command(about = "Transaction screening from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Screen a transaction and forward it on a clean verdict.
    Send {
        /// Amount to submit. Omit to enter amounts interactively.
        #[arg(long)]
        amount: Option<String>,
    },
    /// Print the persistent user and device identifiers.
    Identity,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = payshield_core::load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Send { amount }) => send::run(&config, amount).await,
        Some(Commands::Identity) => identity::run(&config),
        None => {
            println!("payshield-cli: use `send` to screen a transaction or `identity` to inspect stored identifiers");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
