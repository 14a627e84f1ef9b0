use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use std::{io, process::ExitCode};
use weather_core::{CityInput, Config, WeatherController, provider_from_config};

use crate::terminal::{OutputFormat, TerminalSink};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current conditions and five-day forecast for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Visual Crossing API key.
    Configure {
        /// Custom timeline endpoint, e.g. for a proxy.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Show weather for a city.
    Show {
        /// City name; prompted for when omitted.
        city: Option<String>,

        /// Print the normalized view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure { endpoint } => {
                configure(endpoint)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, json } => show(city, json).await,
        }
    }
}

fn configure(endpoint: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if config.is_configured() {
        println!("An API key is already stored; entering a new one replaces it.");
    }

    let api_key = Password::new("Visual Crossing API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_owned());

    if let Some(endpoint) = endpoint {
        config.set_endpoint(endpoint);
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let format = if json { OutputFormat::Json } else { OutputFormat::Text };
    let sink = TerminalSink::new(io::stdout(), io::stderr(), format);

    let mut controller = WeatherController::new(provider, PromptInput::new(city), sink);

    match controller.on_submit().await {
        Some(_) => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}

/// City from the command line, falling back to an interactive prompt.
#[derive(Debug)]
struct PromptInput {
    preset: Option<String>,
}

impl PromptInput {
    fn new(preset: Option<String>) -> Self {
        Self { preset }
    }
}

impl CityInput for PromptInput {
    fn read_city(&mut self) -> Option<String> {
        if let Some(city) = self.preset.take() {
            return Some(city);
        }

        match Text::new("City:").prompt() {
            Ok(city) => Some(city),
            Err(err) => {
                tracing::debug!(error = %err, "city prompt aborted");
                None
            }
        }
    }
}
