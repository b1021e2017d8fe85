use crate::{Config, WeatherResult, error::LookupError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key, base_url),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Arc::new(provider))
}
