//! Text rendering of the view state.

use weather_core::{Condition, ViewState, i18n};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    /// Colours are on unless `NO_COLOR` is set or the caller disabled them.
    pub fn detect(no_color: bool) -> Self {
        Self {
            color: !no_color && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

pub fn icon(condition: &Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀",
        Condition::Clouds => "☁",
        Condition::Rain => "🌧",
        Condition::Snow => "❄",
        Condition::Thunderstorm => "⛈",
        Condition::Other(_) => "☁",
    }
}

/// 256-colour ANSI code for the icon, per theme. `None` means plain text.
fn icon_color(condition: &Condition, dark_mode: bool) -> Option<&'static str> {
    let (light, dark) = match condition {
        Condition::Clear => ("\x1b[38;5;220m", "\x1b[38;5;214m"),
        Condition::Clouds => ("\x1b[38;5;250m", "\x1b[38;5;244m"),
        Condition::Rain => ("\x1b[38;5;32m", "\x1b[38;5;39m"),
        Condition::Snow => ("\x1b[38;5;247m", "\x1b[38;5;255m"),
        Condition::Thunderstorm => ("\x1b[38;5;236m", "\x1b[38;5;60m"),
        Condition::Other(_) => return None,
    };
    Some(if dark_mode { dark } else { light })
}

fn accent(dark_mode: bool) -> &'static str {
    if dark_mode {
        "\x1b[38;5;214m"
    } else {
        "\x1b[38;5;32m"
    }
}

pub fn header(state: &ViewState, style: Style) -> String {
    let title = style.paint(BOLD, state.t(i18n::WEATHER_APP));
    let theme = if state.dark_mode {
        state.t(i18n::DARK_MODE)
    } else {
        state.t(i18n::LIGHT_MODE)
    };
    // Shows the language a toggle would switch to.
    let other = state.locale.toggled().as_str().to_uppercase();

    format!(
        "{title}  [{theme} | {}: {}]",
        state.t(i18n::LANGUAGE),
        style.paint(accent(state.dark_mode), &other)
    )
}

/// Body of the widget: spinner line, result card, and error line.
pub fn body(state: &ViewState, style: Style) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str(state.t(i18n::LOADING));
        out.push('\n');
    } else if let Some(weather) = &state.result {
        let glyph = icon(&weather.condition);
        let glyph = match icon_color(&weather.condition, state.dark_mode) {
            Some(code) => style.paint(code, glyph),
            None => glyph.to_string(),
        };

        out.push_str(&format!("{glyph}  {}\n", weather.condition));
        out.push_str(&style.paint(BOLD, &format!("{}°C", weather.temperature_c)));
        out.push('\n');
        out.push_str(&weather.location_name);
        out.push('\n');
        out.push_str(&format!(
            "{}: {}%   {}: {} m/s\n",
            state.t(i18n::HUMIDITY),
            weather.humidity_pct,
            state.t(i18n::WIND_SPEED),
            weather.wind_speed_mps,
        ));
        if let Some(at) = weather.observation_time {
            let local = at.with_timezone(&chrono::Local);
            out.push_str(&format!(
                "{}: {}\n",
                state.t(i18n::UPDATED),
                local.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    if let Some(error) = &state.error {
        out.push_str(&style.paint(RED, error));
        out.push('\n');
    }

    out
}

pub fn render(state: &ViewState, style: Style) -> String {
    format!("{}\n\n{}", header(state, style), body(state, style))
}
