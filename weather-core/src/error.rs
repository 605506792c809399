use thiserror::Error;

/// Failures a weather query can end in.
///
/// The `Display` output of every variant is the message shown to the user.
/// None of them are fatal: the query component stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The query was empty or only whitespace.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// No API key was found in the environment or the config file.
    #[error(
        "API key missing. Set WEATHER_API_KEY in your environment or run `weather configure`."
    )]
    MissingCredential,

    /// The provider answered with an error payload; carries its message verbatim.
    #[error("{0}")]
    NotFound(String),

    /// The request never produced a usable response.
    #[error("Network error. Try again later.")]
    Transport {
        /// Underlying cause, for logs only.
        detail: String,
    },
}

impl WeatherError {
    /// Fallback message used when the provider reports an error without one.
    pub const NOT_FOUND_FALLBACK: &'static str = "City not found";

    /// Build a `NotFound` from an optional provider message.
    pub fn not_found(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => WeatherError::NotFound(msg),
            _ => WeatherError::NotFound(Self::NOT_FOUND_FALLBACK.to_string()),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        WeatherError::Transport { detail: detail.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_prefers_provider_message() {
        let err = WeatherError::not_found(Some("city not found".into()));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn not_found_falls_back_when_message_missing_or_blank() {
        assert_eq!(WeatherError::not_found(None).to_string(), "City not found");
        assert_eq!(WeatherError::not_found(Some("  ".into())).to_string(), "City not found");
    }

    #[test]
    fn transport_hides_detail_from_display() {
        let err = WeatherError::transport("connection refused");
        assert_eq!(err.to_string(), "Network error. Try again later.");
        assert!(matches!(err, WeatherError::Transport { ref detail } if detail == "connection refused"));
    }

    #[test]
    fn missing_credential_names_both_sources() {
        let msg = WeatherError::MissingCredential.to_string();
        assert!(msg.contains("WEATHER_API_KEY"));
        assert!(msg.contains("weather configure"));
    }
}
