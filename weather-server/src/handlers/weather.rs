//! Weather lookup handler

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};
use weather_core::{LookupError, WeatherReport, WeatherRequest};

use crate::{error::ApiError, state::AppState};

/// `POST /get-weather`
///
/// An unreadable or non-JSON body is treated the same as a missing city.
#[instrument(skip_all)]
pub async fn get_weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected weather request body");
            return Err(LookupError::InvalidInput.into());
        }
    };

    let report = state.gateway.lookup(&request.city).await?;
    Ok(Json(report))
}
