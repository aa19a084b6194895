use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::byte_parser::tally;

mod byte_parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        tracing::warn!("No inputs given, nothing to parse.");
        return Ok(());
    }

    let tally = tally(inputs.iter().map(String::as_str))?;
    tracing::info!("Sum of {} parsed inputs: {}", tally.parsed, tally.total);
    Ok(())
}
