//! Skycast CLI
//!
//! Current weather and forecasts for a city, coordinates or the configured
//! position, from the OpenWeather API.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod prompt;
mod render;

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::Context;
use application::{
    ApplicationError, LookupOutcome, LookupService, Session, SuggestionOutcome, SuggestionService,
    ports::{DevicePositionPort, GeocodingPort, WeatherPort},
};
use clap::{Parser, Subcommand};
use domain::UnitSystem;
use infrastructure::{AppConfig, ConfiguredPositionAdapter, OpenWeatherAdapter, init_logging};
use tracing::{debug, warn};

use crate::render::{SuggestionText, WeatherText, error_banner, error_json};

/// Skycast CLI
#[derive(Debug, Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather lookups from the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Unit system, overrides the configured default
    #[arg(short, long, global = true)]
    units: Option<UnitSystem>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (default: ./skycast.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Show weather for the configured position, or the default city
    Start,

    /// Show weather for a city
    ///
    /// Example: skycast search "New York"
    Search {
        /// City name
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Show weather for coordinates
    ///
    /// Example: skycast locate --lat 25.77 --lon -80.19
    Locate {
        /// Latitude (-90 to 90)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude (-180 to 180)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show weather for the configured position, failing if none is set
    LocateMe,

    /// Suggest cities for partially typed text
    Suggest {
        /// Partial city name
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Lookup collaborators shared by every weather command
struct Lookup {
    service: LookupService,
    session: Session,
    device: ConfiguredPositionAdapter,
}

impl Lookup {
    async fn run(&mut self, command: &Commands) -> Result<LookupOutcome, ApplicationError> {
        let device: &dyn DevicePositionPort = &self.device;
        match command {
            Commands::Start => self.session.start(&self.service, device).await,
            Commands::Search { city } => {
                self.session.search(&self.service, &city.join(" ")).await
            },
            Commands::Locate { lat, lon } => self.session.locate(&self.service, *lat, *lon).await,
            Commands::LocateMe => self.session.locate_me(&self.service, device).await,
            Commands::Suggest { .. } => Err(ApplicationError::Configuration(
                "suggest is not a weather lookup".to_string(),
            )),
        }
    }

    /// Re-run the last requested query, or the whole command when none was recorded
    async fn retry(&mut self, command: &Commands) -> Result<LookupOutcome, ApplicationError> {
        if self.session.last_query().is_some() {
            self.session.retry(&self.service).await
        } else {
            self.run(command).await
        }
    }
}

fn print_error(error: &ApplicationError, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", error_json(error)?);
    } else {
        eprintln!("{}", error_banner(error));
    }
    Ok(())
}

fn print_outcome(outcome: LookupOutcome, json: bool) -> anyhow::Result<()> {
    match outcome.into_view() {
        Some(view) if json => println!("{}", serde_json::to_string_pretty(&view)?),
        Some(view) => print!("{}", WeatherText(&view)),
        None => debug!("Lookup superseded, nothing to show"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    for warning in config.warnings() {
        warn!("{warning}");
    }

    let units = cli.units.unwrap_or(config.weather.units);
    let adapter = Arc::new(OpenWeatherAdapter::new(config.weather.to_client_config())?);

    if let Commands::Suggest { text } = &cli.command {
        let service = SuggestionService::new(adapter, config.suggestions.to_settings());
        match service.suggest(&text.join(" ")).await {
            SuggestionOutcome::Ready(list) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&list)?);
            },
            SuggestionOutcome::Ready(list) => print!("{}", SuggestionText(&list)),
            SuggestionOutcome::Superseded => debug!("Suggestion request superseded"),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut lookup = Lookup {
        service: LookupService::new(
            Arc::clone(&adapter) as Arc<dyn GeocodingPort>,
            adapter as Arc<dyn WeatherPort>,
        ),
        session: Session::new(units, config.weather.default_city.clone()),
        device: ConfiguredPositionAdapter::new(config.weather.default_position()),
    };

    let interactive = io::stdin().is_terminal() && !cli.json;
    let mut result = lookup.run(&cli.command).await;

    loop {
        match result {
            Ok(outcome) => {
                print_outcome(outcome, cli.json)?;
                return Ok(ExitCode::SUCCESS);
            },
            Err(error) => {
                print_error(&error, cli.json)?;
                let retry = interactive
                    && error.is_retryable()
                    && prompt::confirm_retry(&mut io::stdin().lock(), &mut io::stderr())?;
                if !retry {
                    return Ok(ExitCode::FAILURE);
                }
                result = lookup.retry(&cli.command).await;
            },
        }
    }
}
