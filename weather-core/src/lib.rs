//! Core library for the weather suggestion service.
//!
//! This crate defines:
//! - Temperature bands and their static lifestyle suggestions
//! - The upstream weather provider abstraction and its wttr.in client
//! - The gateway turning a city name into a report or a categorised error
//! - Configuration handling
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod provider;
pub mod suggestions;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{ErrorKind, LookupError, ProviderError};
pub use gateway::WeatherGateway;
pub use model::{Observation, WeatherReport, WeatherRequest};
pub use provider::{WeatherProvider, wttr::WttrProvider};
pub use suggestions::{Suggestions, TemperatureBand, classify};
