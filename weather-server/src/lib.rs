//! HTTP surface for the weather suggestion service.
//!
//! Exposes `POST /get-weather` backed by [`weather_core::WeatherGateway`] and
//! serves the static front-end for every other path.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
