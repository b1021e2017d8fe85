use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{
    Confirm, InquireError, Password, PasswordDisplayMode, Select, Text, validator::Validation,
};
use tracing::debug;
use weather_core::{Config, Controller, Locale, ViewState, i18n, provider_from_config};

use crate::render::{self, Style};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Display options shared by every command that renders the widget.
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// UI language, overrides the configured one ("en" or "pl").
    #[arg(long, global = true, value_parser = parse_locale)]
    pub lang: Option<Locale>,

    /// Start in dark mode.
    #[arg(long, global = true, conflicts_with = "light")]
    pub dark: bool,

    /// Start in light mode, even if the config asks for dark.
    #[arg(long, global = true)]
    pub light: bool,

    /// Disable ANSI colours.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default preferences.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, passed to the weather service as typed.
        city: String,
    },

    /// Interactive session (default when no command is given).
    Interactive,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Returns true when the process should exit with a failure status.
    pub async fn run(self) -> anyhow::Result<bool> {
        let config = Config::load()?;
        debug!(locale = %config.locale, dark_mode = config.dark_mode, "loaded config");
        let style = Style::detect(self.display.no_color);

        let ctl = match &self.command {
            Some(Command::Configure) => {
                configure(config)?;
                return Ok(false);
            }
            Some(Command::Show { city }) => {
                let mut ctl = controller(&config, &self.display)?;
                ctl.submit(city).await;
                print!("{}", render::render(ctl.state(), style));
                ctl
            }
            Some(Command::Interactive) | None => {
                interactive(controller(&config, &self.display)?, style).await?
            }
        };

        Ok(exit_failed(self.command.as_ref(), ctl.state()))
    }
}

/// Only a one-shot `show` reports a failed lookup through the exit status.
fn exit_failed(command: Option<&Command>, state: &ViewState) -> bool {
    matches!(command, Some(Command::Show { .. })) && state.error.is_some()
}

fn dark_mode(display: &DisplayArgs, config: &Config) -> bool {
    if display.light {
        false
    } else {
        display.dark || config.dark_mode
    }
}

fn controller(config: &Config, display: &DisplayArgs) -> anyhow::Result<Controller> {
    let provider = provider_from_config(config)?;
    let state = ViewState::new(
        display.lang.unwrap_or(config.locale),
        dark_mode(display, config),
    );
    Ok(Controller::new(provider, state))
}

/// What the user typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    City(&'a str),
    ToggleTheme,
    ToggleLocale,
    Quit,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        ":theme" | ":t" => Input::ToggleTheme,
        ":lang" | ":l" => Input::ToggleLocale,
        ":quit" | ":q" => Input::Quit,
        _ => Input::City(line),
    }
}

/// Apply a toggle and redraw the whole widget in the new language or theme.
fn toggle(ctl: &mut Controller, input: &Input<'_>, style: Style) -> Option<String> {
    match input {
        Input::ToggleTheme => ctl.toggle_theme(),
        Input::ToggleLocale => ctl.toggle_locale(),
        Input::City(_) | Input::Quit => return None,
    }
    Some(render::render(ctl.state(), style))
}

async fn interactive(mut ctl: Controller, style: Style) -> anyhow::Result<Controller> {
    println!("{}", render::header(ctl.state(), style));
    println!("(:theme, :lang, :quit)");

    loop {
        let prompt = ctl.state().t(i18n::ENTER_CITY).to_string();
        let answer = match Text::new(&prompt)
            .with_validator(|input: &str| {
                Ok(if input.trim().is_empty() {
                    Validation::Invalid("empty input".into())
                } else {
                    Validation::Valid
                })
            })
            .prompt_skippable()
        {
            Ok(answer) => answer,
            Err(InquireError::OperationInterrupted) => None,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        let Some(line) = answer else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::City(city) => {
                let ticket = ctl.begin(city);
                print!("{}", render::body(ctl.state(), style));
                let outcome = ctl.provider().current_weather(ticket.query()).await;
                ctl.finish(&ticket, outcome);
                println!();
                print!("{}", render::body(ctl.state(), style));
            }
            input => {
                if let Some(screen) = toggle(&mut ctl, &input, style) {
                    print!("{screen}");
                }
            }
        }
    }

    Ok(ctl)
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key (empty to keep current):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key);
    }

    let start = Locale::all()
        .iter()
        .position(|l| *l == config.locale)
        .unwrap_or(0);
    config.locale = Select::new("Default language:", Locale::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read language")?;

    config.dark_mode = Confirm::new("Start in dark mode?")
        .with_default(config.dark_mode)
        .prompt()
        .context("Failed to read theme")?;

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{Condition, LookupError, WeatherResult};

    #[test]
    fn parses_show_with_global_flags() {
        let cli = Cli::try_parse_from(["weather", "show", "London", "--lang", "en", "--dark"])
            .expect("should parse");

        assert!(matches!(cli.command, Some(Command::Show { ref city }) if city == "London"));
        assert_eq!(cli.display.lang, Some(Locale::En));
        assert!(cli.display.dark);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["weather"]).expect("should parse");
        assert!(cli.command.is_none());
        assert!(cli.display.lang.is_none());
    }

    #[test]
    fn rejects_unknown_language() {
        let err = Cli::try_parse_from(["weather", "--lang", "de"]).unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }

    #[test]
    fn prompt_commands() {
        assert_eq!(parse_input(":theme"), Input::ToggleTheme);
        assert_eq!(parse_input(" :l "), Input::ToggleLocale);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input("New York"), Input::City("New York"));
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            api_key: Some("KEY".into()),
            ..Config::default()
        };
        let display = DisplayArgs {
            lang: Some(Locale::En),
            dark: true,
            ..DisplayArgs::default()
        };

        let ctl = controller(&config, &display).expect("controller should build");
        assert_eq!(ctl.state().locale, Locale::En);
        assert!(ctl.state().dark_mode);
    }

    #[test]
    fn light_flag_overrides_dark_config() {
        let config = Config {
            api_key: Some("KEY".into()),
            dark_mode: true,
            ..Config::default()
        };
        let cli = Cli::try_parse_from(["weather", "--light"]).expect("should parse");

        let ctl = controller(&config, &cli.display).expect("controller should build");
        assert!(!ctl.state().dark_mode);
        assert!(dark_mode(&DisplayArgs::default(), &config));
    }

    #[test]
    fn dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["weather", "--dark", "--light"]).is_err());
    }

    #[test]
    fn toggle_redraws_the_card() {
        let config = Config {
            api_key: Some("KEY".into()),
            ..Config::default()
        };
        let display = DisplayArgs {
            lang: Some(Locale::En),
            ..DisplayArgs::default()
        };
        let mut ctl = controller(&config, &display).expect("controller should build");

        let ticket = ctl.begin("London");
        ctl.finish(
            &ticket,
            Ok(WeatherResult {
                location_name: "London".into(),
                temperature_c: 18.2,
                humidity_pct: 55,
                wind_speed_mps: 4.1,
                condition: Condition::Clear,
                observation_time: None,
            }),
        );

        let plain = Style { color: false };
        let screen = toggle(&mut ctl, &Input::ToggleLocale, plain).expect("toggle should redraw");
        assert!(screen.contains("Aplikacja Pogodowa"));
        assert!(screen.contains("Wilgotność: 55%"));

        let screen = toggle(&mut ctl, &Input::ToggleTheme, plain).expect("toggle should redraw");
        assert!(screen.contains("Tryb ciemny"));
        assert!(screen.contains("London"));

        assert!(toggle(&mut ctl, &Input::Quit, plain).is_none());
    }

    #[test]
    fn only_show_fails_the_exit_status() {
        let (state, ticket) = ViewState::default().with_query("Atlantis").submit();
        let failed = state.resolve(
            &ticket,
            Err(LookupError::Status {
                status: 404,
                body: String::new(),
            }),
        );
        let show = Command::Show {
            city: "Atlantis".into(),
        };

        assert!(exit_failed(Some(&show), &failed));
        assert!(!exit_failed(Some(&Command::Interactive), &failed));
        assert!(!exit_failed(None, &failed));
        assert!(!exit_failed(Some(&show), &ViewState::default()));
    }
}
