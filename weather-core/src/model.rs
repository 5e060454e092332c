use serde::{Deserialize, Serialize};

use crate::suggestions::{Suggestions, classify};

/// Body of `POST /get-weather`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: String,
}

/// Current conditions extracted from the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Area name as resolved by the provider, may differ from the query.
    pub city: String,
    pub country: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub description: String,
    pub humidity: i64,
    pub wind_kmph: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub observation: Observation,
    pub suggestions: Suggestions,
}

impl From<Observation> for WeatherReport {
    fn from(observation: Observation) -> Self {
        let suggestions = classify(observation.temperature);
        Self { observation, suggestions }
    }
}
