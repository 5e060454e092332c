//! Request-scoped weather lookup: validate, fetch, classify, assemble.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    Config,
    error::{LookupError, ProviderError},
    model::WeatherReport,
    provider::{WeatherProvider, provider_from_config},
};

/// Entry point for lookups. Holds no mutable state, so clones can serve
/// concurrent requests freely.
#[derive(Debug, Clone)]
pub struct WeatherGateway {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherGateway {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// Look up current conditions for `city` and attach the matching suggestions.
    ///
    /// Blank input is rejected before any network call. Every provider failure
    /// is folded into one of the [`LookupError`] categories; the underlying
    /// cause is only logged.
    #[instrument(skip(self))]
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let observation = self.provider.current(city).await.map_err(|err| {
            match &err {
                ProviderError::Transport(_) | ProviderError::Config(_) => {
                    error!(error = %err, "Weather lookup failed")
                }
                _ => warn!(error = %err, "Weather lookup failed"),
            }
            LookupError::from(err)
        })?;

        info!(
            resolved = %observation.city,
            temperature = observation.temperature,
            "Weather lookup succeeded"
        );

        Ok(WeatherReport::from(observation))
    }
}
