use async_trait::async_trait;
use tracing::warn;

use crate::model::{WeatherRequest, WeatherSnapshot};

use super::{ProviderError, WeatherProvider, demo::DemoProvider};

/// Serves demo data when the wrapped provider fails.
///
/// Blank locations are still rejected; only fetch failures fall back.
#[derive(Debug)]
pub struct FallbackProvider {
    primary: Box<dyn WeatherProvider>,
    fallback: DemoProvider,
}

impl FallbackProvider {
    pub fn new(primary: Box<dyn WeatherProvider>) -> Self {
        Self { primary, fallback: DemoProvider }
    }
}

#[async_trait]
impl WeatherProvider for FallbackProvider {
    async fn get_snapshot(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, ProviderError> {
        match self.primary.get_snapshot(request).await {
            Ok(snapshot) => Ok(snapshot),
            Err(ProviderError::EmptyLocation) => Err(ProviderError::EmptyLocation),
            Err(err) => {
                warn!(
                    location = %request.location,
                    error = %err,
                    "weather fetch failed, using demo data"
                );
                self.fallback.get_snapshot(request).await
            }
        }
    }
}
