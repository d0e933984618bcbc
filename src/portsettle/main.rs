use clap::{Parser, command};
use portsettle::error::SettleResult;
use settle::{SettleOptions, handle_settle};

mod settle;

#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
enum Cli {
    /// Wait out the post-upload settle delay
    #[command(name = "settle", alias = "s")]
    Settle(SettleOptions),
}

fn main() -> SettleResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli {
        Cli::Settle(opts) => handle_settle(opts)?,
    }

    Ok(())
}
