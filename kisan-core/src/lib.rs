//! Core library for the `kisan` weather CLI.
//!
//! This crate defines:
//! - Shared domain models (weather snapshots, requests)
//! - The agricultural advisory rules and their English/Hindi messages
//! - The static crop calendar
//! - Abstraction over weather providers, plus a built-in demo provider
//! - Configuration & credentials handling
//!
//! It is used by `kisan-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod calendar;
pub mod config;
pub mod locale;
pub mod model;
pub mod provider;

pub use advisory::{AdvisoryMessage, Category, RuleSet, RuleSetKind, Severity, evaluate};
pub use calendar::{FarmingTip, TipSection, crop_calendar};
pub use config::{Config, ProviderConfig};
pub use locale::Locale;
pub use model::{CurrentConditions, DayForecast, Location, WeatherRequest, WeatherSnapshot};
pub use provider::{ProviderError, ProviderId, WeatherProvider};
