//! The weather query component.
//!
//! Owns the query text and one [`RequestState`]. A submit validates the
//! query, moves to `Loading`, performs a single provider call and settles in
//! `Success` or `Error`.

use tracing::{debug, info};

use crate::{WeatherError, WeatherProvider, WeatherResult};

/// Where the component stands. Result and error can never coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Error(WeatherError),
}

/// A validated request, produced by [`WeatherQuery::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    city: String,
    api_key: String,
}

impl PendingRequest {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug)]
pub struct WeatherQuery<P> {
    provider: P,
    credential: Option<String>,
    query: String,
    state: RequestState,
}

impl<P: WeatherProvider> WeatherQuery<P> {
    /// `credential` is read once by the caller; `None` makes every submit fail.
    pub fn new(provider: P, credential: Option<String>) -> Self {
        Self { provider, credential, query: String::new(), state: RequestState::Idle }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match &self.state {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WeatherError> {
        match &self.state {
            RequestState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Validate and enter `Loading`.
    ///
    /// Returns `None` after recording `EmptyInput` or `MissingCredential`;
    /// no request may be issued in that case.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        let city = self.query.trim();
        if city.is_empty() {
            self.state = RequestState::Error(WeatherError::EmptyInput);
            return None;
        }

        let Some(api_key) = self.credential.clone() else {
            self.state = RequestState::Error(WeatherError::MissingCredential);
            return None;
        };

        let pending = PendingRequest { city: city.to_string(), api_key };
        // Replaces any previous result or error.
        self.state = RequestState::Loading;
        debug!(city = %pending.city, "weather request started");

        Some(pending)
    }

    /// Issue the single provider call for `pending`.
    pub async fn fetch(&self, pending: &PendingRequest) -> Result<WeatherResult, WeatherError> {
        self.provider.current_weather(&pending.city, &pending.api_key).await
    }

    /// Settle a request. Always leaves `Loading`.
    pub fn finish(&mut self, outcome: Result<WeatherResult, WeatherError>) {
        self.state = match outcome {
            Ok(result) => {
                info!(
                    location = %result.location_label(),
                    category = %result.category(),
                    "weather received"
                );
                RequestState::Success(result)
            }
            Err(err) => {
                info!(error = %err, "weather request failed");
                RequestState::Error(err)
            }
        };
    }

    /// Validate, fetch and settle in one go.
    pub async fn submit(&mut self) -> &RequestState {
        if let Some(pending) = self.begin() {
            let outcome = self.fetch(&pending).await;
            self.finish(outcome);
        }

        &self.state
    }
}
