//! Benefits Aggregator Server Entry Point

use benefits_aggregator::cli::{Cli, Commands};
use benefits_aggregator::{config, logging, server};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = match cli.command {
        Some(Commands::Serve(args)) => args.into_config(),
        // サブコマンドなしは環境変数の設定で起動
        None => config::load_from_env(),
    };

    tracing::info!("Benefits Aggregator v{}", env!("CARGO_PKG_VERSION"));
    server::run(config).await
}
