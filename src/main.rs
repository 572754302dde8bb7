//! qdice CLI entry point

use anyhow::{Context, Result};
use qdice::backend::statevector::StatevectorSimulator;
use qdice::config::{cli::Cli, toml::build_config, validator::validate_config};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    println!("qdice v{}", env!("CARGO_PKG_VERSION"));
    println!("Quantum Coin Toss & Dice Simulator");
    println!();

    let cli = Cli::parse_args();
    setup_logging(cli.debug)?;

    let config = build_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;

    println!("Configuration:");
    println!("{}", config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    let mut backend = StatevectorSimulator::from_seed(config.seed);
    info!(mode = %config.mode, shots = config.shots, "starting run");

    let (generation, _) = qdice::run(&config, &mut backend)?;

    println!();
    println!("Done: {}", generation);
    Ok(())
}

fn setup_logging(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}
