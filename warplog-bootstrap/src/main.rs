use anyhow::Result;
use clap::Parser;

use warplog_infrastructure::CONFIG_ENV;

#[derive(Parser, Debug)]
#[command(name = "warplog")]
#[command(about = "Warp history tracker: pity, banner and outcome analytics", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    warplog_bootstrap::run().await
}
