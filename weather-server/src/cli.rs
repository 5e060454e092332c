use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use weather_core::{Config, LookupError, WeatherGateway, WeatherReport};
use weather_server::{AppState, create_router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather lookups with lifestyle suggestions")]
pub struct Cli {
    /// Use this config file instead of the platform default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service.
    Serve {
        /// Listening port, overrides the config file.
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the front-end files.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show weather and suggestions for a city.
    Show {
        /// City or location name.
        city: String,
    },

    /// Interactively edit and save the configuration.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command {
            None => serve(config).await,
            Some(Command::Serve { port, static_dir }) => {
                serve(config.with_overrides(port, static_dir)).await
            }
            Some(Command::Show { city }) => {
                let gateway = WeatherGateway::from_config(&config)
                    .context("Failed to build weather provider client")?;
                println!("{}", show_output(gateway.lookup(&city).await));
                Ok(())
            }
            Some(Command::Configure) => configure(config, self.config.as_deref()),
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let gateway =
        WeatherGateway::from_config(&config).context("Failed to build weather provider client")?;
    let app = create_router(AppState::new(gateway), &config.server.static_dir);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        %addr,
        static_dir = %config.server.static_dir.display(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        // Without a handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn configure(mut config: Config, path: Option<&Path>) -> anyhow::Result<()> {
    config.server.port = CustomType::<u16>::new("Listening port:")
        .with_default(config.server.port)
        .prompt()?;

    let current_dir = config.server.static_dir.display().to_string();
    let static_dir = Text::new("Static files directory:")
        .with_default(&current_dir)
        .prompt()?;
    config.server.static_dir = PathBuf::from(static_dir);

    let current_url = config.provider.base_url.clone();
    config.provider.base_url = Text::new("Weather provider base URL:")
        .with_default(&current_url)
        .prompt()?;

    config.provider.timeout_secs = CustomType::<u64>::new("Provider timeout in seconds:")
        .with_default(config.provider.timeout_secs)
        .with_validator(|secs: &u64| -> Result<Validation, CustomUserError> {
            Ok(if *secs == 0 {
                Validation::Invalid("Timeout must be at least 1 second".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()?;

    config.provider.validate()?;

    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }

    println!(
        "Saved: port {}, static files from {}, provider {} ({}s timeout).",
        config.server.port,
        config.server.static_dir.display(),
        config.provider.base_url,
        config.provider.timeout_secs
    );
    Ok(())
}

/// What `show` prints: the report, or the categorised message on failure.
fn show_output(result: Result<WeatherReport, LookupError>) -> String {
    match result {
        Ok(report) => TerminalReport(&report).to_string(),
        Err(err) => err.to_string(),
    }
}

/// Human-readable report for the terminal.
struct TerminalReport<'a>(&'a WeatherReport);

impl fmt::Display for TerminalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = &self.0.observation;
        let suggestions = &self.0.suggestions;

        writeln!(f, "{}, {}", obs.city, obs.country)?;
        writeln!(
            f,
            "  {}°C (feels like {}°C), {}",
            obs.temperature, obs.feels_like, obs.description
        )?;
        write!(f, "  Humidity {}%, wind {} km/h", obs.humidity, obs.wind_kmph)?;

        let sections = [
            ("Clothing", &suggestions.clothing),
            ("Accessories", &suggestions.accessories),
            ("Travel", &suggestions.travel),
            ("Health", &suggestions.health),
        ];
        for (title, items) in sections {
            write!(f, "\n\n{title}:")?;
            for item in items {
                write!(f, "\n  - {item}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{Observation, ProviderError};

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["weather-server"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["weather-server", "serve", "--port", "8080"]).expect("parse");
        match cli.command {
            Some(Command::Serve { port, static_dir }) => {
                assert_eq!(port, Some(8080));
                assert!(static_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["weather-server", "show"]).is_err());
        let cli = Cli::try_parse_from(["weather-server", "show", "Cape Town"]).expect("parse");
        assert!(matches!(cli.command, Some(Command::Show { city }) if city == "Cape Town"));
    }

    fn cairo() -> WeatherReport {
        WeatherReport::from(Observation {
            city: "Cairo".into(),
            country: "Egypt".into(),
            temperature: 36,
            feels_like: 38,
            description: "Sunny".into(),
            humidity: 20,
            wind_kmph: 7,
        })
    }

    #[test]
    fn render_lists_every_category() {
        let text = TerminalReport(&cairo()).to_string();
        assert!(text.starts_with("Cairo, Egypt\n"));
        assert!(text.contains("36°C (feels like 38°C), Sunny"));
        for title in ["Clothing:", "Accessories:", "Travel:", "Health:"] {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(text.ends_with("  - Seek shade frequently"));
    }

    #[test]
    fn show_prints_report_on_success() {
        let text = show_output(Ok(cairo()));
        assert!(text.starts_with("Cairo, Egypt\n"));
    }

    #[test]
    fn show_prints_categorised_message_on_failure() {
        assert_eq!(
            show_output(Err(LookupError::from(ProviderError::Status(404)))),
            "City not found or weather service unavailable."
        );
        assert_eq!(show_output(Err(LookupError::InvalidInput)), "City name is required.");
        assert_eq!(
            show_output(Err(LookupError::from(ProviderError::Timeout))),
            "Weather service timed out. Try again."
        );
    }
}
