use crate::availability::models::{ImageryError, ImageryStatus, MetadataResponse};
use crate::map_locations::models::Coordinate;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

#[async_trait]
pub trait ImageryService: Send + Sync {
    async fn check_availability(
        &self,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> Result<ImageryStatus, ImageryError>;
}

pub struct StreetViewMetadataClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl StreetViewMetadataClient {
    pub fn new(http_client: Client, base_url: Url, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ImageryService for StreetViewMetadataClient {
    async fn check_availability(
        &self,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> Result<ImageryStatus, ImageryError> {
        let response: MetadataResponse = self
            .http_client
            .get(self.base_url.clone())
            .query(&[
                ("location", coordinate.to_string()),
                ("radius", radius_m.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ImageryStatus::from_code(&response.status))
    }
}

/// Used when no API key is configured: every spot gets the fallback view.
pub struct NoImagery;

#[async_trait]
impl ImageryService for NoImagery {
    async fn check_availability(
        &self,
        _coordinate: Coordinate,
        _radius_m: u32,
    ) -> Result<ImageryStatus, ImageryError> {
        Err(ImageryError::Disabled)
    }
}
