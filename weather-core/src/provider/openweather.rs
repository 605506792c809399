use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{WeatherError, WeatherResult};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at another host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().build().context("Failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn current_url(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_WEATHER_PATH)
    }
}

/// Deserialize a field, turning a type mismatch into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwSys {
    #[serde(deserialize_with = "lenient")]
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    #[serde(deserialize_with = "lenient")]
    main: Option<String>,
    #[serde(deserialize_with = "lenient")]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    #[serde(deserialize_with = "lenient")]
    temp: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    feels_like: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    temp_min: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    temp_max: Option<f64>,
    /// Integer in practice, but `84.0` is accepted too.
    #[serde(deserialize_with = "lenient")]
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWind {
    #[serde(deserialize_with = "lenient")]
    speed: Option<f64>,
}

/// Every field is optional and a mistyped field reads as absent, so a
/// success payload with holes still maps to a result.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    sys: Option<OwSys>,
    /// Raw entries; a `null` or malformed first entry yields empty labels.
    #[serde(deserialize_with = "lenient")]
    weather: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient")]
    main: Option<OwMain>,
    #[serde(deserialize_with = "lenient")]
    wind: Option<OwWind>,
    /// Number on success, string ("404") on errors.
    cod: Option<Value>,
    message: Option<Value>,
}

impl OwCurrentResponse {
    /// `cod` other than 200 marks an error payload, whatever the HTTP status said.
    fn reports_error(&self) -> bool {
        let code = match &self.cod {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };

        matches!(code, Some(code) if code != 200)
    }

    fn error_message(&self) -> Option<String> {
        match &self.message {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    fn into_result(self) -> WeatherResult {
        let first: OwWeather = self
            .weather
            .and_then(|list| list.into_iter().next())
            .and_then(|entry| serde_json::from_value(entry).ok())
            .unwrap_or_default();
        let main = self.main.unwrap_or_default();

        WeatherResult {
            location_name: self.name.unwrap_or_default(),
            country: self.sys.and_then(|s| s.country).unwrap_or_default(),
            condition: first.main.unwrap_or_default(),
            description: first.description.unwrap_or_default(),
            temperature_c: main.temp,
            feels_like_c: main.feels_like,
            temp_min_c: main.temp_min,
            temp_max_c: main.temp_max,
            humidity_pct: main
                .humidity
                .filter(|h| h.is_finite())
                .map(|h| h.round().clamp(0.0, 100.0) as u8),
            wind_speed_mps: self.wind.and_then(|w| w.speed),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self, api_key), fields(base_url = %self.base_url))]
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<WeatherResult, WeatherError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather request failed");
                WeatherError::transport(format!("Failed to send request to OpenWeather: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(error = %e, "failed to read OpenWeather response body");
            WeatherError::transport(format!("Failed to read OpenWeather response body: {e}"))
        })?;

        debug!(%status, bytes = body.len(), "OpenWeather responded");

        // `null` is valid JSON but carries no data.
        let parsed: Option<OwCurrentResponse> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %truncate_body(&body), "malformed OpenWeather JSON");
            WeatherError::transport(format!("Failed to parse OpenWeather JSON: {e}"))
        })?;

        match parsed {
            Some(data) if status.is_success() && !data.reports_error() => Ok(data.into_result()),
            Some(data) => {
                debug!(%status, "OpenWeather reported an error");
                Err(WeatherError::not_found(data.error_message()))
            }
            None => Err(WeatherError::not_found(None)),
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
