use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WeatherError, WeatherResult, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// A source of current weather for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city`, authenticating with `api_key`.
    ///
    /// Implementations issue at most one request and never retry.
    async fn current_weather(&self, city: &str, api_key: &str)
    -> Result<WeatherResult, WeatherError>;
}

/// Construct the OpenWeather provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    OpenWeatherProvider::with_base_url(config.base_url())
}
