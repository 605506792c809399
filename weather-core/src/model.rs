use crate::condition::ConditionCategory;

/// Current weather for one location, as shown in the result panel.
///
/// Text fields are empty when the provider left them out; numbers are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherResult {
    pub location_name: String,
    pub country: String,
    /// Primary condition label, e.g. "Rain".
    pub condition: String,
    pub description: String,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub temp_min_c: Option<f64>,
    pub temp_max_c: Option<f64>,
    pub humidity_pct: Option<u8>,
    pub wind_speed_mps: Option<f64>,
}

impl WeatherResult {
    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::classify(Some(self.condition.as_str()))
    }

    /// "Name, CC", dropping whichever half is missing.
    pub fn location_label(&self) -> String {
        match (self.location_name.is_empty(), self.country.is_empty()) {
            (false, false) => format!("{}, {}", self.location_name, self.country),
            (false, true) => self.location_name.clone(),
            (true, false) => self.country.clone(),
            (true, true) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_label_variants() {
        let mut result = WeatherResult {
            location_name: "London".into(),
            country: "GB".into(),
            ..Default::default()
        };
        assert_eq!(result.location_label(), "London, GB");

        result.country.clear();
        assert_eq!(result.location_label(), "London");

        result.location_name.clear();
        assert_eq!(result.location_label(), "");
    }

    #[test]
    fn empty_condition_is_default_category() {
        assert_eq!(WeatherResult::default().category(), ConditionCategory::Default);
    }
}
