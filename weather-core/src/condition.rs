//! Condition label classification.
//!
//! Maps the provider's free-form condition label ("Clear", "Rain",
//! "light drizzle", ...) onto a closed set of categories, each with a fixed
//! icon and background gradient.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    /// Rain and drizzle.
    Rain,
    Thunderstorm,
    Snow,
    /// Mist and fog.
    Mist,
    Default,
}

/// Keyword table, checked in order against the lower-cased label.
///
/// Thunderstorm sits before rain so "thunderstorm with rain" stays a thunderstorm.
const KEYWORDS: &[(&str, ConditionCategory)] = &[
    ("clear", ConditionCategory::Clear),
    ("cloud", ConditionCategory::Clouds),
    ("thunder", ConditionCategory::Thunderstorm),
    ("rain", ConditionCategory::Rain),
    ("drizzle", ConditionCategory::Rain),
    ("snow", ConditionCategory::Snow),
    ("fog", ConditionCategory::Mist),
    ("mist", ConditionCategory::Mist),
];

impl ConditionCategory {
    /// Classify a condition label. Absent, empty or unknown labels map to `Default`.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return ConditionCategory::Default;
        };

        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() {
            return ConditionCategory::Default;
        }

        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|&(_, category)| category)
            .unwrap_or(ConditionCategory::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Clear => "clear",
            ConditionCategory::Clouds => "clouds",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Mist => "mist",
            ConditionCategory::Default => "default",
        }
    }

    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Clear,
            ConditionCategory::Clouds,
            ConditionCategory::Rain,
            ConditionCategory::Thunderstorm,
            ConditionCategory::Snow,
            ConditionCategory::Mist,
            ConditionCategory::Default,
        ]
    }

    /// Icon for this category. `Default` shares the clear-sky icon.
    pub fn icon(&self) -> Icon {
        match self {
            ConditionCategory::Clear | ConditionCategory::Default => Icon::DAY_SUNNY,
            ConditionCategory::Clouds => Icon::CLOUD,
            ConditionCategory::Rain => Icon::RAIN,
            ConditionCategory::Thunderstorm => Icon::THUNDERSTORM,
            ConditionCategory::Snow => Icon::SNOW,
            ConditionCategory::Mist => Icon::FOG,
        }
    }

    /// Background gradient. Mist has no dedicated gradient and uses the neutral one.
    pub fn background(&self) -> Gradient {
        match self {
            ConditionCategory::Clear => Gradient::CLEAR,
            ConditionCategory::Clouds => Gradient::CLOUDS,
            ConditionCategory::Rain => Gradient::RAIN,
            ConditionCategory::Thunderstorm => Gradient::THUNDERSTORM,
            ConditionCategory::Snow => Gradient::SNOW,
            ConditionCategory::Mist | ConditionCategory::Default => Gradient::NEUTRAL,
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weather icon, drawn as a terminal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
}

impl Icon {
    pub const DAY_SUNNY: Icon = Icon { glyph: "☀️" };
    pub const CLOUD: Icon = Icon { glyph: "☁️" };
    pub const RAIN: Icon = Icon { glyph: "🌧️" };
    pub const THUNDERSTORM: Icon = Icon { glyph: "⛈️" };
    pub const SNOW: Icon = Icon { glyph: "❄️" };
    pub const FOG: Icon = Icon { glyph: "🌫️" };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// CSS direction, e.g. `to right` or `135deg`.
    pub direction: &'static str,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const CLEAR: Gradient = Gradient::to_right(Rgb(0xfd, 0xdb, 0x92), Rgb(0xd1, 0xfd, 0xff));
    pub const CLOUDS: Gradient = Gradient::to_right(Rgb(0xbd, 0xc3, 0xc7), Rgb(0x2c, 0x3e, 0x50));
    pub const RAIN: Gradient = Gradient::to_right(Rgb(0x4e, 0x54, 0xc8), Rgb(0x8f, 0x94, 0xfb));
    pub const THUNDERSTORM: Gradient =
        Gradient::to_right(Rgb(0x14, 0x1e, 0x30), Rgb(0x24, 0x3b, 0x55));
    pub const SNOW: Gradient = Gradient::to_right(Rgb(0x83, 0xa4, 0xd4), Rgb(0xb6, 0xfb, 0xff));
    pub const NEUTRAL: Gradient = Gradient {
        direction: "135deg",
        from: Rgb(0x4f, 0xac, 0xfe),
        to: Rgb(0x00, 0xf2, 0xfe),
    };

    const fn to_right(from: Rgb, to: Rgb) -> Self {
        Gradient { direction: "to right", from, to }
    }

    pub fn css(&self) -> String {
        format!("linear-gradient({}, {}, {})", self.direction, self.from.hex(), self.to.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        let expected = ConditionCategory::Clear;
        for label in ["CLEAR", "clear", "Clear"] {
            let category = ConditionCategory::classify(Some(label));
            assert_eq!(category, expected);
            assert_eq!(category.icon(), Icon::DAY_SUNNY);
            assert_eq!(category.background(), Gradient::CLEAR);
        }
    }

    #[test]
    fn provider_main_labels() {
        let cases = [
            ("Clear", ConditionCategory::Clear),
            ("Clouds", ConditionCategory::Clouds),
            ("Rain", ConditionCategory::Rain),
            ("Drizzle", ConditionCategory::Rain),
            ("Thunderstorm", ConditionCategory::Thunderstorm),
            ("Snow", ConditionCategory::Snow),
            ("Mist", ConditionCategory::Mist),
            ("Fog", ConditionCategory::Mist),
        ];

        for (label, category) in cases {
            assert_eq!(ConditionCategory::classify(Some(label)), category, "label {label}");
        }
    }

    #[test]
    fn substring_matches_descriptions() {
        assert_eq!(
            ConditionCategory::classify(Some("light intensity drizzle")),
            ConditionCategory::Rain
        );
        assert_eq!(
            ConditionCategory::classify(Some("broken clouds")),
            ConditionCategory::Clouds
        );
        assert_eq!(
            ConditionCategory::classify(Some("thunderstorm with heavy rain")),
            ConditionCategory::Thunderstorm
        );
    }

    #[test]
    fn absent_or_unknown_defaults() {
        for label in [None, Some(""), Some("   "), Some("Haze"), Some("Tornado")] {
            let category = ConditionCategory::classify(label);
            assert_eq!(category, ConditionCategory::Default);
            assert_eq!(category.icon(), Icon::DAY_SUNNY);
            assert_eq!(category.background(), Gradient::NEUTRAL);
        }
    }

    #[test]
    fn rain_maps_to_rain_icon_and_background() {
        let category = ConditionCategory::classify(Some("Rain"));
        assert_eq!(category.icon(), Icon::RAIN);
        assert_eq!(category.background().css(), "linear-gradient(to right, #4e54c8, #8f94fb)");
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(ConditionCategory::Thunderstorm.to_string(), "thunderstorm");
        assert_eq!(ConditionCategory::classify(Some("FOG")).to_string(), "mist");
    }

    #[test]
    fn neutral_gradient_css() {
        assert_eq!(Gradient::NEUTRAL.css(), "linear-gradient(135deg, #4facfe, #00f2fe)");
    }

    #[test]
    fn every_category_has_icon_and_background() {
        for category in ConditionCategory::all() {
            assert!(!category.icon().glyph.is_empty());
            assert!(category.background().css().starts_with("linear-gradient("));
        }
    }
}
