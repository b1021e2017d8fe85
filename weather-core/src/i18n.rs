//! Bundled translation tables.
//!
//! Two locales ship with the widget. Lookups fall back to English and then
//! to the key itself, so a missing entry still renders something readable.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::LazyLock};

pub const WEATHER_APP: &str = "Weather App";
pub const ENTER_CITY: &str = "Enter city";
pub const FAILED_TO_FIND_CITY: &str = "Failed to find city";
pub const HUMIDITY: &str = "Humidity";
pub const WIND_SPEED: &str = "Wind Speed";
pub const LOADING: &str = "Loading";
pub const DARK_MODE: &str = "Dark mode";
pub const LIGHT_MODE: &str = "Light mode";
pub const LANGUAGE: &str = "Language";
pub const UPDATED: &str = "Updated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pl,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pl => "pl",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Pl]
    }

    /// The other bundled locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Pl,
            Locale::Pl => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Locale {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "pl" => Ok(Locale::Pl),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{value}'. Supported languages: en, pl."
            )),
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

const EN: &[(&str, &str)] = &[
    (WEATHER_APP, "Weather App"),
    (ENTER_CITY, "Enter city"),
    (FAILED_TO_FIND_CITY, "Failed to find city"),
    (HUMIDITY, "Humidity"),
    (WIND_SPEED, "Wind Speed"),
    (LOADING, "Loading..."),
    (DARK_MODE, "Dark mode"),
    (LIGHT_MODE, "Light mode"),
    (LANGUAGE, "Language"),
    (UPDATED, "Updated"),
];

const PL: &[(&str, &str)] = &[
    (WEATHER_APP, "Aplikacja Pogodowa"),
    (ENTER_CITY, "Wpisz miasto"),
    (FAILED_TO_FIND_CITY, "Nie udało się znaleźć miasta"),
    (HUMIDITY, "Wilgotność"),
    (WIND_SPEED, "Prędkość wiatru"),
    (LOADING, "Ładowanie..."),
    (DARK_MODE, "Tryb ciemny"),
    (LIGHT_MODE, "Tryb jasny"),
    (LANGUAGE, "Język"),
    (UPDATED, "Aktualizacja"),
];

static TABLES: LazyLock<HashMap<Locale, Table>> = LazyLock::new(|| {
    HashMap::from([
        (Locale::En, EN.iter().copied().collect()),
        (Locale::Pl, PL.iter().copied().collect()),
    ])
});

/// Translate `key` for `locale`.
pub fn translate(locale: Locale, key: &str) -> &str {
    let found: Option<&str> = lookup(locale, key).or_else(|| lookup(Locale::En, key));
    found.unwrap_or(key)
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    TABLES.get(&locale).and_then(|table| table.get(key)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_as_str_roundtrip() {
        for locale in Locale::all() {
            let parsed = Locale::try_from(locale.as_str()).expect("roundtrip should succeed");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn unknown_locale_error() {
        let err = Locale::try_from("de").unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }

    #[test]
    fn default_locale_is_polish() {
        assert_eq!(Locale::default(), Locale::Pl);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for locale in Locale::all() {
            assert_eq!(locale.toggled().toggled(), *locale);
        }
    }

    #[test]
    fn translates_failure_message() {
        assert_eq!(translate(Locale::En, FAILED_TO_FIND_CITY), "Failed to find city");
        assert_eq!(
            translate(Locale::Pl, FAILED_TO_FIND_CITY),
            "Nie udało się znaleźć miasta"
        );
    }

    #[test]
    fn every_english_key_has_a_polish_entry() {
        for (key, _) in EN {
            assert!(lookup(Locale::Pl, key).is_some(), "missing pl entry for {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Locale::Pl, "Feels like"), "Feels like");
    }
}
