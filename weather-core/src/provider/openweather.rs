use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::LookupError,
    model::{Condition, WeatherResult},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// The API key stays out of logs.
impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl From<OwCurrentResponse> for WeatherResult {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| Condition::from(w.main))
            .unwrap_or_else(|| Condition::Other(String::new()));

        WeatherResult {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition,
            observation_time: parsed.dt.and_then(unix_to_utc),
        }
    }
}

/// Decode a current-weather body into a result.
pub fn parse_current(body: &str) -> Result<WeatherResult, LookupError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;
    Ok(parsed.into())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);
        debug!("requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let result = parse_current(&body)?;
        debug!(location = %result.location_name, condition = %result.condition, "lookup succeeded");
        Ok(result)
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
