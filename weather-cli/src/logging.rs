use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count.
pub fn filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "weather_core=info,weather=info,warn",
        2 => "weather_core=debug,weather=debug,info",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_from_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_from_verbosity(0), "warn");
        assert!(filter_from_verbosity(1).contains("weather_core=info"));
        assert!(filter_from_verbosity(2).contains("weather_core=debug"));
        assert_eq!(filter_from_verbosity(7), "trace");
    }

    #[test]
    fn every_level_parses() {
        for v in 0..4 {
            assert!(EnvFilter::try_new(filter_from_verbosity(v)).is_ok());
        }
    }
}
