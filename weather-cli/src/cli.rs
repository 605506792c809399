use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::{debug, warn};
use weather_core::{
    API_KEY_ENV, Config, OpenWeatherProvider, RequestState, WeatherProvider, WeatherQuery,
    provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure {
        /// Override the provider host, e.g. for a local mock.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        city: Vec<String>,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { base_url } => configure(base_url),
            Command::Show { city } => show(&mut build_query()?, city.join(" ")).await,
            Command::Interactive => interactive(&mut build_query()?).await,
        }
    }
}

fn build_query() -> anyhow::Result<WeatherQuery<OpenWeatherProvider>> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let credential = config.credential();
    debug!(base_url = provider.base_url(), has_credential = credential.is_some(), "query ready");

    Ok(WeatherQuery::new(provider, credential))
}

/// Run one lookup and print the outcome. An `Error` state becomes `Err`,
/// so the process exits non-zero.
async fn show<P: WeatherProvider>(
    query: &mut WeatherQuery<P>,
    city: String,
) -> anyhow::Result<()> {
    query.set_query(city);
    submit_with_progress(query).await;

    match query.state() {
        RequestState::Success(result) => {
            print!("{}", render::panel(result));
            Ok(())
        }
        RequestState::Error(err) => Err(err.clone().into()),
        RequestState::Idle | RequestState::Loading => Ok(()),
    }
}

async fn interactive<P: WeatherProvider>(query: &mut WeatherQuery<P>) -> anyhow::Result<()> {
    println!("{}", "🌤 Weather".bold());

    loop {
        let input = Text::new("Enter city")
            .with_initial_value(query.query())
            .with_help_message("Enter to search, Esc to quit")
            .prompt();

        let input = match input {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        query.set_query(input);
        submit_with_progress(query).await;

        if let Some(out) = render::state(query.state()) {
            println!("{out}");
        }
    }

    Ok(())
}

/// Submit, printing the loading line while the request is outstanding.
async fn submit_with_progress<P: WeatherProvider>(query: &mut WeatherQuery<P>) {
    if let Some(pending) = query.begin() {
        if let Some(loading) = render::state(query.state()) {
            eprintln!("{loading}");
        }
        let outcome = query.fetch(&pending).await;
        query.finish(outcome);
    }
}

fn configure(base_url: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Leave empty to remove the stored key")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    if base_url.is_some() {
        config.base_url = base_url;
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    if std::env::var_os(API_KEY_ENV).is_some() {
        warn!("{API_KEY_ENV} is set and takes precedence over the stored key");
    }

    Ok(())
}
