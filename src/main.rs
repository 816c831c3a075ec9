use tracing::info;
use tracing_subscriber::EnvFilter;

use elevator_bank::modules;
use elevator_bank::utilities::config::Config;
use elevator_bank::utilities::error::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_thread_names(true)
        .init();

    let config = Config::get()?;
    info!(?config, "Elevator bank started");

    let summaries = modules::run(&config)?;
    info!(rounds = summaries.len(), "simulation finished");
    Ok(())
}
