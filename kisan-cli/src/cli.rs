use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, Select};
use kisan_core::{
    Config, Locale, ProviderId, RuleSet, WeatherRequest, crop_calendar,
    provider::{default_provider_from_config, provider_from_config},
};
use serde::Serialize;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "kisan", version, about = "Weather and farm advisories for Indian farmers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure a provider (API key if needed) and the display language.
    Configure {
        /// Provider short name, e.g. "weatherapi" or "demo".
        provider: String,
    },

    /// Show weather, forecast and advisories for a location.
    Show {
        /// City or location name.
        location: String,

        /// Display language ("en" or "hi"); overrides the configured one.
        #[arg(long)]
        lang: Option<String>,

        /// Provider to use instead of the configured default.
        #[arg(long)]
        provider: Option<String>,

        /// Number of forecast days.
        #[arg(long)]
        days: Option<u8>,

        /// Print the snapshot and advisories as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show seasonal farming and crop-care tips.
    Tips {
        #[arg(long)]
        lang: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    snapshot: &'a kisan_core::WeatherSnapshot,
    advisories: &'a [kisan_core::AdvisoryMessage],
}

/// `--lang` wins over the configured language.
fn resolve_locale(flag: Option<&str>, config: &Config) -> Locale {
    flag.map(Locale::from_tag).unwrap_or(config.language)
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure { provider } => {
                let id = ProviderId::try_from(provider.as_str())?;
                configure(&mut config, id)?;
                config.save()?;
                println!(
                    "Saved configuration to {}",
                    Config::config_file_path()?.display()
                );
            }
            Command::Show { location, lang, provider, days, json } => {
                let locale = resolve_locale(lang.as_deref(), &config);
                let request =
                    WeatherRequest::new(&location, days.unwrap_or(config.forecast_days))?;

                let provider = match provider {
                    Some(name) => {
                        provider_from_config(ProviderId::try_from(name.as_str())?, &config)?
                    }
                    None => default_provider_from_config(&config)?,
                };

                let snapshot = provider
                    .get_snapshot(&request)
                    .await
                    .with_context(|| {
                        format!("Failed to fetch weather for '{}'", request.location)
                    })?;

                let advisories = RuleSet::from_kind(config.rule_set).evaluate(&snapshot, locale);
                tracing::debug!(count = advisories.len(), %locale, "advisories evaluated");

                if json {
                    let report = Report { snapshot: &snapshot, advisories: &advisories };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::report(&snapshot, &advisories, locale));
                }
            }
            Command::Tips { lang } => {
                let locale = resolve_locale(lang.as_deref(), &config);
                print!("{}", render::tips(&crop_calendar(locale), locale));
            }
        }

        Ok(())
    }
}

fn configure(config: &mut Config, id: ProviderId) -> anyhow::Result<()> {
    if id.requires_api_key() {
        let api_key = Password::new(&format!("API key for {id}:"))
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            bail!("API key must not be empty.");
        }
        config.upsert_provider_api_key(id, api_key.to_string());
    }

    config.set_default_provider(id);

    let options: Vec<&str> = Locale::all().iter().map(|l| l.native_name()).collect();
    let current = Locale::all().iter().position(|l| *l == config.language).unwrap_or(0);
    let choice = Select::new("Language / भाषा:", options)
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read language choice")?;

    config.language = Locale::all()
        .iter()
        .copied()
        .find(|l| l.native_name() == choice)
        .unwrap_or_default();

    Ok(())
}
