//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - The view state and its pure transitions
//! - The request controller that drives lookups
//! - The OpenWeather provider behind a small trait
//! - Bundled English and Polish translations
//! - Preferences handling
//!
//! It is used by `weather-widget`, but any other front end can drive the
//! same [`Controller`].

pub mod config;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod model;
pub mod provider;
pub mod state;

pub use config::Config;
pub use controller::Controller;
pub use error::LookupError;
pub use i18n::Locale;
pub use model::{Condition, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use state::{Ticket, ViewState};
