use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::model::{CurrentConditions, DayForecast, Location, WeatherRequest, WeatherSnapshot};

use super::{ProviderError, WeatherProvider, truncate_body};

const PROVIDER: &str = "weatherapi";
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com `forecast.json` endpoint.
#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherApiProvider {
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

    #[instrument(skip_all, fields(location = %request.location, days = request.days))]
    async fn fetch_forecast(&self, request: &WeatherRequest) -> Result<WaResponse, ProviderError> {
        let url = format!("{}/forecast.json", self.base_url);
        debug!(%url, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.location.as_str()),
                ("days", &request.days.to_string()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Request { provider: PROVIDER, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Request { provider: PROVIDER, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| ProviderError::Parse { provider: PROVIDER, source })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: f64,
    wind_kph: f64,
    #[serde(default)]
    wind_dir: String,
    uv: f64,
    precip_mm: Option<f64>,
    pressure_mb: f64,
    vis_km: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: WaCondition,
    daily_chance_of_rain: u8,
    avghumidity: f64,
    maxwind_kph: f64,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    day: WaDay,
    astro: WaAstro,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

impl WaForecastDay {
    fn into_day_forecast(self) -> Result<DayForecast, ProviderError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| {
            ProviderError::InvalidData {
                provider: PROVIDER,
                reason: format!("invalid forecast date '{}': {e}", self.date),
            }
        })?;

        Ok(DayForecast {
            date,
            max_temp_c: self.day.maxtemp_c,
            min_temp_c: self.day.mintemp_c,
            condition: self.day.condition.text,
            rain_chance_pct: self.day.daily_chance_of_rain,
            avg_humidity_pct: self.day.avghumidity,
            max_wind_kph: self.day.maxwind_kph,
            sunrise: self.astro.sunrise,
            sunset: self.astro.sunset,
        })
    }
}

impl WaResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, ProviderError> {
        let forecast = self
            .forecast
            .forecastday
            .into_iter()
            .map(WaForecastDay::into_day_forecast)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WeatherSnapshot {
            provider: PROVIDER.to_string(),
            location: Location {
                name: self.location.name,
                region: self.location.region,
                country: self.location.country,
            },
            current: CurrentConditions {
                temperature_c: self.current.temp_c,
                feels_like_c: self.current.feelslike_c,
                humidity_pct: self.current.humidity,
                wind_kph: self.current.wind_kph,
                wind_dir: self.current.wind_dir,
                uv_index: self.current.uv,
                precipitation_mm: self.current.precip_mm,
                pressure_mb: self.current.pressure_mb,
                visibility_km: self.current.vis_km,
                condition: self.current.condition.text,
            },
            forecast,
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn get_snapshot(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError> {
        self.fetch_forecast(request).await?.into_snapshot()
    }
}
