use std::io::{self, Read};

use clap::Parser;
use herald::{
    config::AppConfig,
    dispatcher::{DispatchOutcome, Dispatcher},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing herald.yaml. Defaults to `.claude` in the
    /// working directory the hook runs from.
    #[arg(long)]
    config_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Hook stdout is read by the producer; keep all logging on stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let config = AppConfig::new(cli.config_dir.as_deref())?;
    tracing::debug!(filter = ?config.filter, sink = ?config.sink, "Configuration loaded.");

    let mut raw = String::new();
    io::stdin().lock().read_to_string(&mut raw)?;

    let dispatcher = Dispatcher::from_config(&config);

    match dispatcher.run(&raw).await? {
        DispatchOutcome::Dispatched => tracing::debug!("Notification dispatched."),
        DispatchOutcome::Filtered => tracing::debug!("Event filtered out, nothing dispatched."),
        // Already reported at the dispatch boundary; the hook still exits 0.
        DispatchOutcome::DeliveryFailed => {}
    }

    Ok(())
}
