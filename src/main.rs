use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use simon::config::{self, ConfigError, try_load_config, try_load_config_from_path};
use simon::event::Ticker;
use simon::shell::Shell;
use simon::system::collector::SysinfoSampler;
use simon::system::engine::RateEngine;

#[derive(Parser)]
#[command(
    name = "simon",
    about = "System monitor: CPU, memory, disk and network activity at a glance"
)]
struct Cli {
    /// Update interval in seconds
    #[arg(short = 'r', long = "rate", value_parser = clap::value_parser!(u64).range(1..))]
    rate: Option<u64>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, config_error) = load_config_for_cli(&cli);
    init_tracing(&config.logging)?;
    if let Some(err) = config_error {
        tracing::warn!(%err, "using default configuration");
    }

    run(config, cli.ticks).await
}

async fn run(config: config::Config, max_ticks: Option<u64>) -> Result<()> {
    let interval = Duration::from_secs(config.general.update_interval_secs());
    let engine = RateEngine::new(SysinfoSampler::new());
    let mut shell = Shell::new(
        engine,
        config.general.title_symbol.clone(),
        config.general.max_name_width,
    );
    let mut ticker = Ticker::new(interval);

    tracing::info!(interval_secs = ticker.period().as_secs(), "simon is running");
    print!("{}", shell.render());

    let mut ticks = 0u64;
    loop {
        tokio::select! {
            elapsed = ticker.next() => {
                // Failures are logged by the shell; the next tick retries.
                let _ = shell.on_tick(elapsed);
                print!("{}", shell.render());
                ticks += 1;
                if max_ticks.is_some_and(|max| ticks >= max) {
                    break;
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
        }
    }

    tracing::info!(ticks, "simon stopped");
    Ok(())
}

/// The error, if any, is returned rather than logged: tracing is not
/// installed until the logging section of the config is known.
fn load_config_for_cli(cli: &Cli) -> (config::Config, Option<ConfigError>) {
    let loaded = match &cli.config {
        Some(path) => try_load_config_from_path(path),
        None => try_load_config(),
    };
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    if let Some(rate) = cli.rate {
        config.general.update_interval_secs = rate;
    }
    if cli.log_json {
        config.logging.json = true;
    }

    (config, error)
}

fn init_tracing(logging: &config::LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(logging.max_level())
        .with_writer(std::io::stderr);

    let result = if logging.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
