use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{config::ProviderConfig, error::ProviderError, model::Observation};

use super::WeatherProvider;

/// Client for wttr.in-style `?format=j1` endpoints.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: String,
    http: Client,
}

impl WttrProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn lookup_url(&self, city: &str) -> String {
        format!("{}/{}?format=j1", self.base_url, urlencoding::encode(city))
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    #[instrument(skip(self))]
    async fn current(&self, city: &str) -> Result<Observation, ProviderError> {
        let url = self.lookup_url(city);
        debug!(url = %url, "Fetching current conditions");

        let res = self.http.get(&url).send().await?;

        // Only a plain 200 carries a usable `format=j1` payload.
        let status = res.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        parse_observation(&body).inspect_err(|e| {
            debug!(error = %e, body = %truncate_body(&body), "Unusable provider payload");
        })
    }
}

/// Typed extraction of the fields this service consumes from a `format=j1`
/// payload. Any missing key, empty array or non-numeric reading collapses into
/// a single [`ProviderError::Malformed`].
pub fn parse_observation(body: &str) -> Result<Observation, ProviderError> {
    let parsed: WttrResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let current = parsed
        .current_condition
        .first()
        .ok_or_else(|| missing("current_condition[0]"))?;
    let area = parsed.nearest_area.first().ok_or_else(|| missing("nearest_area[0]"))?;

    Ok(Observation {
        city: first_value(&area.area_name, "nearest_area[0].areaName[0]")?,
        country: first_value(&area.country, "nearest_area[0].country[0]")?,
        temperature: current.temp_c.to_i64("temp_C")?,
        feels_like: current.feels_like_c.to_i64("FeelsLikeC")?,
        description: first_value(&current.weather_desc, "current_condition[0].weatherDesc[0]")?,
        humidity: current.humidity.to_i64("humidity")?,
        wind_kmph: current.windspeed_kmph.to_i64("windspeedKmph")?,
    })
}

fn missing(field: &str) -> ProviderError {
    ProviderError::Malformed(format!("missing field `{field}`"))
}

fn first_value(values: &[WttrValue], field: &str) -> Result<String, ProviderError> {
    values.first().map(|v| v.value.clone()).ok_or_else(|| missing(field))
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCurrent>,
    nearest_area: Vec<WttrArea>,
}

#[derive(Debug, Deserialize)]
struct WttrCurrent {
    #[serde(rename = "temp_C")]
    temp_c: Numeric,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: Numeric,
    humidity: Numeric,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: Numeric,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrValue>,
}

#[derive(Debug, Deserialize)]
struct WttrArea {
    #[serde(rename = "areaName")]
    area_name: Vec<WttrValue>,
    country: Vec<WttrValue>,
}

#[derive(Debug, Deserialize)]
struct WttrValue {
    value: String,
}

/// wttr.in encodes readings as strings, but plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Text(String),
    Number(serde_json::Number),
}

impl Numeric {
    /// Strings must hold an integer; numbers are truncated toward zero.
    fn to_i64(&self, field: &str) -> Result<i64, ProviderError> {
        match self {
            Numeric::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                ProviderError::Malformed(format!("field `{field}` is not an integer: {s:?}"))
            }),
            Numeric::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .ok_or_else(|| ProviderError::Malformed(format!("field `{field}` out of range: {n}"))),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(temp: serde_json::Value) -> String {
        json!({
            "current_condition": [{
                "temp_C": temp,
                "FeelsLikeC": "13",
                "humidity": "72",
                "windspeedKmph": "11",
                "weatherDesc": [{ "value": "Partly cloudy" }]
            }],
            "nearest_area": [{
                "areaName": [{ "value": "London" }],
                "country": [{ "value": "United Kingdom" }]
            }]
        })
        .to_string()
    }

    #[test]
    fn extracts_all_fields() {
        let obs = parse_observation(&payload(json!("15"))).expect("valid payload");
        assert_eq!(
            obs,
            Observation {
                city: "London".into(),
                country: "United Kingdom".into(),
                temperature: 15,
                feels_like: 13,
                description: "Partly cloudy".into(),
                humidity: 72,
                wind_kmph: 11,
            }
        );
    }

    #[test]
    fn negative_and_padded_strings_parse() {
        assert_eq!(parse_observation(&payload(json!("-7"))).expect("parse").temperature, -7);
        assert_eq!(parse_observation(&payload(json!(" 4 "))).expect("parse").temperature, 4);
    }

    #[test]
    fn numeric_values_truncate() {
        assert_eq!(parse_observation(&payload(json!(15.9))).expect("parse").temperature, 15);
        assert_eq!(parse_observation(&payload(json!(-2.7))).expect("parse").temperature, -2);
        assert_eq!(parse_observation(&payload(json!(21))).expect("parse").temperature, 21);
    }

    #[test]
    fn fractional_or_text_strings_are_malformed() {
        for bad in [json!("15.5"), json!("warm"), json!("")] {
            let err = parse_observation(&payload(bad.clone())).unwrap_err();
            assert!(matches!(err, ProviderError::Malformed(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn integers_beyond_i64_are_malformed() {
        let err = parse_observation(&payload(json!("99999999999999999999"))).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)), "{err:?}");
    }

    #[test]
    fn missing_sections_are_malformed() {
        let err = parse_observation(r#"{"nearest_area": []}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));

        let err = parse_observation(r#"{"current_condition": [], "nearest_area": []}"#).unwrap_err();
        assert!(err.to_string().contains("current_condition[0]"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_observation("<html>Unknown location</html>").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn city_is_percent_encoded_into_path() {
        let provider = WttrProvider::new(&ProviderConfig {
            base_url: "http://localhost:1234/".into(),
            ..Default::default()
        })
        .expect("client");

        assert_eq!(
            provider.lookup_url("New York"),
            "http://localhost:1234/New%20York?format=j1"
        );
        assert_eq!(provider.lookup_url("a/b"), "http://localhost:1234/a%2Fb?format=j1");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let out = truncate_body(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
