//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The OpenWeather provider behind a small provider trait
//! - The weather result model and condition styling tables
//! - The query component driving a single fetch-and-render cycle
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;

pub use condition::{ConditionCategory, Gradient, Icon, Rgb};
pub use config::{API_KEY_ENV, Config};
pub use error::WeatherError;
pub use model::WeatherResult;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use query::{PendingRequest, RequestState, WeatherQuery};
