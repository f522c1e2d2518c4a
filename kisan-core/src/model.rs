use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;

const DEFAULT_FORECAST_DAYS: u8 = 3;
const MAX_FORECAST_DAYS: u8 = 14;

/// A location lookup: free-text place name plus forecast window length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub days: u8,
}

impl WeatherRequest {
    /// Build a request, rejecting blank locations. `days` is clamped to 1..=14.
    pub fn new(location: &str, days: u8) -> Result<Self, ProviderError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ProviderError::EmptyLocation);
        }

        Ok(Self { location: location.to_string(), days: days.clamp(1, MAX_FORECAST_DAYS) })
    }

    pub fn for_location(location: &str) -> Result<Self, ProviderError> {
        Self::new(location, DEFAULT_FORECAST_DAYS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Conditions at observation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub uv_index: f64,
    /// Absent when the source did not report rainfall; read as zero.
    pub precipitation_mm: Option<f64>,
    pub pressure_mb: f64,
    pub visibility_km: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: String,
    /// Chance of rain over the day, 0..=100.
    pub rain_chance_pct: u8,
    pub avg_humidity_pct: f64,
    pub max_wind_kph: f64,
    pub sunrise: String,
    pub sunset: String,
}

/// One weather reading plus its forecast window, as returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub provider: String,
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Vec<DayForecast>,
}

impl WeatherSnapshot {
    pub fn precipitation_mm(&self) -> f64 {
        self.current.precipitation_mm.unwrap_or(0.0)
    }

    /// Highest rain chance across the forecast window, 0 when the window is empty.
    pub fn max_rain_chance_pct(&self) -> u8 {
        self.forecast.iter().map(|day| day.rain_chance_pct).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::demo::demo_snapshot;

    #[test]
    fn request_rejects_blank_location() {
        let err = WeatherRequest::new("   ", 3).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyLocation));
    }

    #[test]
    fn request_trims_and_clamps_days() {
        let req = WeatherRequest::new("  Pune ", 0).unwrap();
        assert_eq!(req.location, "Pune");
        assert_eq!(req.days, 1);

        let req = WeatherRequest::new("Pune", 40).unwrap();
        assert_eq!(req.days, 14);
    }

    #[test]
    fn missing_precipitation_reads_as_zero() {
        let mut snapshot = demo_snapshot("Delhi");
        snapshot.current.precipitation_mm = None;
        assert_eq!(snapshot.precipitation_mm(), 0.0);
    }

    #[test]
    fn max_rain_chance_over_window() {
        let mut snapshot = demo_snapshot("Delhi");
        assert_eq!(snapshot.max_rain_chance_pct(), 80);

        snapshot.forecast.clear();
        assert_eq!(snapshot.max_rain_chance_pct(), 0);
    }
}
