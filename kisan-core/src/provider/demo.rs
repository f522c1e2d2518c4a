//! Built-in demo data for Delhi, served under whatever name was searched.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::model::{CurrentConditions, DayForecast, Location, WeatherRequest, WeatherSnapshot};

use super::{ProviderError, WeatherProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

#[async_trait]
impl WeatherProvider for DemoProvider {
    async fn get_snapshot(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError> {
        debug!(location = %request.location, days = request.days, "serving demo snapshot");

        let mut snapshot = demo_snapshot(&request.location);
        snapshot.forecast.truncate(usize::from(request.days));
        Ok(snapshot)
    }
}

/// The demo fixture with its location renamed to `name`.
pub fn demo_snapshot(name: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        provider: "demo".to_string(),
        location: Location {
            name: name.to_string(),
            region: "Delhi".to_string(),
            country: "India".to_string(),
        },
        current: CurrentConditions {
            temperature_c: 28.0,
            feels_like_c: 31.0,
            humidity_pct: 65.0,
            wind_kph: 12.0,
            wind_dir: "NW".to_string(),
            uv_index: 6.0,
            precipitation_mm: None,
            pressure_mb: 1013.0,
            visibility_km: 10.0,
            condition: "Partly cloudy".to_string(),
        },
        forecast: vec![
            demo_day(
                (2024, 1, 20),
                (30.0, 18.0),
                "Sunny",
                10,
                60.0,
                15.0,
                ("07:12 AM", "05:47 PM"),
            ),
            demo_day(
                (2024, 1, 21),
                (32.0, 20.0),
                "Partly cloudy",
                20,
                58.0,
                18.0,
                ("07:11 AM", "05:48 PM"),
            ),
            demo_day(
                (2024, 1, 22),
                (29.0, 19.0),
                "Light rain",
                80,
                75.0,
                22.0,
                ("07:10 AM", "05:49 PM"),
            ),
        ],
    }
}

fn demo_day(
    (year, month, day): (i32, u32, u32),
    (max_temp_c, min_temp_c): (f64, f64),
    condition: &str,
    rain_chance_pct: u8,
    avg_humidity_pct: f64,
    max_wind_kph: f64,
    (sunrise, sunset): (&str, &str),
) -> DayForecast {
    DayForecast {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        max_temp_c,
        min_temp_c,
        condition: condition.to_string(),
        rain_chance_pct,
        avg_humidity_pct,
        max_wind_kph,
        sunrise: sunrise.to_string(),
        sunset: sunset.to_string(),
    }
}
