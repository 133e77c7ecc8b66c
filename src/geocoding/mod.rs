use crate::map_locations::models::Coordinate;
use async_trait::async_trait;
use models::{GeocodeError, GeocodeResponse, PlaceName};
use reqwest::Client;
use url::Url;

pub mod models;
#[cfg(test)]
pub mod tests;

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<PlaceName, GeocodeError>;
}

pub struct ReverseGeocodingClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl ReverseGeocodingClient {
    pub fn new(http_client: Client, base_url: Url, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Geocoder for ReverseGeocodingClient {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<PlaceName, GeocodeError> {
        let response: GeocodeResponse = self
            .http_client
            .get(self.base_url.clone())
            .query(&[
                ("latlng", coordinate.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        response.into_place_name()
    }
}

pub struct NoGeocoder;

#[async_trait]
impl Geocoder for NoGeocoder {
    async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<PlaceName, GeocodeError> {
        Err(GeocodeError::Disabled)
    }
}
