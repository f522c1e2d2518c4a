use crate::{
    Config, WeatherRequest, WeatherSnapshot,
    provider::{demo::DemoProvider, fallback::FallbackProvider, weatherapi::WeatherApiProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};
use thiserror::Error;

pub mod demo;
pub mod fallback;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Demo,
    WeatherApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Demo => "demo",
            ProviderId::WeatherApi => "weatherapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Demo, ProviderId::WeatherApi]
    }

    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderId::WeatherApi)
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "demo" => Ok(ProviderId::Demo),
            "weatherapi" => Ok(ProviderId::WeatherApi),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: demo, weatherapi."
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Location must not be empty")]
    EmptyLocation,

    #[error("Request to {provider} failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status { provider: &'static str, status: u16, body: String },

    #[error("Failed to parse {provider} response: {source}")]
    Parse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} returned invalid data: {reason}")]
    InvalidData { provider: &'static str, reason: String },
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_snapshot(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError>;
}

/// Construct a provider from config and explicit ProviderId.
///
/// With `fallback_to_demo` set, failures are answered with demo data.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Demo => return Ok(Box::new(DemoProvider)),
        ProviderId::WeatherApi => {
            let api_key = config.provider_api_key(id).ok_or_else(|| {
                anyhow::anyhow!(
                    "No API key configured for provider '{id}'.\n\
                     Hint: run `kisan configure {id}` and enter your API key."
                )
            })?;

            match config.provider_base_url(id) {
                Some(base_url) => {
                    Box::new(WeatherApiProvider::with_base_url(api_key.to_owned(), base_url))
                }
                None => Box::new(WeatherApiProvider::new(api_key.to_owned())),
            }
        }
    };

    if config.fallback_to_demo {
        Ok(Box::new(FallbackProvider::new(boxed)))
    } else {
        Ok(boxed)
    }
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!(ProviderId::try_from("WeatherAPI").unwrap(), ProviderId::WeatherApi);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(ProviderId::WeatherApi, &cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured for provider"));
    }

    #[test]
    fn demo_provider_needs_no_key() {
        let cfg = Config::default();
        assert!(provider_from_config(ProviderId::Demo, &cfg).is_ok());
    }

    #[test]
    fn default_provider_from_config_errors_when_not_set() {
        let cfg = Config::default();
        let err = default_provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No default provider configured"));
        assert!(msg.contains("Hint: run `kisan configure"));
    }

    #[test]
    fn default_provider_from_config_works_when_set_and_configured() {
        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::WeatherApi, "KEY".to_string());

        let provider = default_provider_from_config(&cfg);
        assert!(provider.is_ok());
    }

    #[test]
    fn fallback_wrapping_follows_config() {
        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::WeatherApi, "PRIVATE_KEY".to_string());

        cfg.fallback_to_demo = true;
        let provider = provider_from_config(ProviderId::WeatherApi, &cfg).unwrap();
        let debug = format!("{provider:?}");
        assert!(debug.starts_with("FallbackProvider"));
        assert!(!debug.contains("PRIVATE_KEY"));

        cfg.fallback_to_demo = false;
        let provider = provider_from_config(ProviderId::WeatherApi, &cfg).unwrap();
        let debug = format!("{provider:?}");
        assert!(debug.starts_with("WeatherApiProvider"));
        assert!(!debug.contains("PRIVATE_KEY"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let short = "not found";
        assert_eq!(truncate_body(short), short);

        let long = "नमी".repeat(100);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }
}
