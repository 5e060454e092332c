use crate::{Config, Observation, error::ProviderError, provider::wttr::WttrProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod wttr;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for an already validated, trimmed city name.
    async fn current(&self, city: &str) -> Result<Observation, ProviderError>;
}

/// Construct the upstream provider described by the config.
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn WeatherProvider>, ProviderError> {
    let provider = WttrProvider::new(&config.provider)?;
    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config_builds() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }
}
