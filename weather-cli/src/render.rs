//! Terminal rendering of the query state.

use colored::Colorize;
use weather_core::{RequestState, WeatherError, WeatherResult};

const MISSING: &str = "--";

fn fmt_num(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v}"))
}

/// Uncoloured panel text, one entry per line.
pub fn panel_lines(result: &WeatherResult) -> Vec<String> {
    let category = result.category();
    let icon = category.icon();

    let mut condition = result.condition.clone();
    if !result.description.is_empty() {
        if !condition.is_empty() {
            condition.push_str(" — ");
        }
        condition.push_str(&result.description);
    }

    let humidity = result.humidity_pct.map_or_else(|| MISSING.to_string(), |h| h.to_string());

    vec![
        format!("{} {}", icon.glyph, result.location_label()),
        condition,
        format!("{}°C", fmt_num(result.temperature_c)),
        format!(
            "Feels like {}°C • Humidity {}% • Wind {} m/s",
            fmt_num(result.feels_like_c),
            humidity,
            fmt_num(result.wind_speed_mps),
        ),
        format!("Min {}°C • Max {}°C", fmt_num(result.temp_min_c), fmt_num(result.temp_max_c)),
    ]
}

/// Panel with the header painted in the condition's gradient colours.
pub fn panel(result: &WeatherResult) -> String {
    let background = result.category().background();
    let (from, to) = (background.from, background.to);

    let mut lines = panel_lines(result).into_iter();
    let mut out = String::new();

    if let Some(header) = lines.next() {
        let header = format!(" {header} ");
        out.push_str(&header.bold().on_truecolor(from.0, from.1, from.2).to_string());
        out.push('\n');
    }

    for line in lines {
        out.push_str(&line.truecolor(to.0, to.1, to.2).to_string());
        out.push('\n');
    }

    out
}

pub fn error_line(err: &WeatherError) -> String {
    err.to_string().red().to_string()
}

/// Render whatever the state holds. Idle renders nothing.
pub fn state(state: &RequestState) -> Option<String> {
    match state {
        RequestState::Idle => None,
        RequestState::Loading => Some("Loading...".dimmed().to_string()),
        RequestState::Success(result) => Some(panel(result)),
        RequestState::Error(err) => Some(error_line(err)),
    }
}
