use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather condition code, taken from `weather[0].main` of the API response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    /// Anything outside the fixed vocabulary, e.g. "Mist" or "Drizzle".
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Other(raw) => raw,
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Thunderstorm" => Condition::Thunderstorm,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Condition {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Snapshot of the most recent successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: Condition,
    /// Present only when the response carried a `dt` timestamp.
    pub observation_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_parse_to_variants() {
        assert_eq!(Condition::from("Clear"), Condition::Clear);
        assert_eq!(Condition::from("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from("Rain"), Condition::Rain);
        assert_eq!(Condition::from("Snow"), Condition::Snow);
        assert_eq!(Condition::from("Thunderstorm"), Condition::Thunderstorm);
    }

    #[test]
    fn unknown_condition_keeps_raw_text() {
        let c = Condition::from("Mist");
        assert_eq!(c, Condition::Other("Mist".to_string()));
        assert_eq!(c.as_str(), "Mist");
    }

    #[test]
    fn condition_compares_with_api_spelling() {
        assert!(Condition::Clear == "Clear");
        assert!(Condition::Rain != "Clear");
    }

    #[test]
    fn condition_serializes_as_plain_string() {
        let json = serde_json::to_string(&Condition::Thunderstorm).unwrap();
        assert_eq!(json, "\"Thunderstorm\"");

        let back: Condition = serde_json::from_str("\"Haze\"").unwrap();
        assert_eq!(back, Condition::Other("Haze".into()));
    }
}
