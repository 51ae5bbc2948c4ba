//! wx-announce CLI
//!
//! Fetches current conditions from a Weather Underground station and
//! announces them on an AllStar node through the Asterisk manager.
//! One sequential run per invocation: load config, fetch, format,
//! announce, exit.

#![allow(clippy::print_stdout)]

mod config;

use std::process::ExitCode;

use application::{AnnouncementService, ApplicationError};
use clap::Parser;
use integration_ami::{AmiClient, AmiConfig};
use integration_weather::{WuClient, WuConfig};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};

/// wx-announce CLI
#[derive(Debug, Parser)]
#[command(name = "wx-announce")]
#[command(author, version, about = "Announce station weather on an AllStar node", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fetch and print the announcement without contacting Asterisk
    #[arg(long)]
    dry_run: bool,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Map an error to the process exit code for its failure class
fn exit_code_for(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    match error.downcast_ref::<ApplicationError>() {
        Some(ApplicationError::WeatherFetch(_)) => 3,
        Some(ApplicationError::AnnounceConnection(_)) => 4,
        Some(ApplicationError::AnnounceCommand(_)) => 5,
        None => 1,
    }
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = Config::from_env()?;

    let weather = WuClient::new(WuConfig::new(
        config.wu_api_key,
        config.wu_station_id,
    ))?;
    let announcer = AmiClient::new(AmiConfig {
        host: config.asterisk_host,
        port: config.asterisk_port,
        username: config.asterisk_user,
        secret: config.asterisk_secret,
    });

    let service = AnnouncementService::new(weather, announcer, config.allstar_node);

    let text = if cli.dry_run {
        service.preview().await?
    } else {
        service.run().await?
    };
    Ok(text)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Local runs keep their settings in .env, like the deployment does
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(&cli).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!(error = %e, "Announcement run failed");
            ExitCode::from(exit_code_for(&e))
        },
    }
}
