//! Application state shared across handlers

use weather_core::WeatherGateway;

#[derive(Debug, Clone)]
pub struct AppState {
    pub gateway: WeatherGateway,
}

impl AppState {
    pub fn new(gateway: WeatherGateway) -> Self {
        Self { gateway }
    }
}
