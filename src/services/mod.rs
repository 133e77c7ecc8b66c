use crate::availability::service::{ImageryService, NoImagery, StreetViewMetadataClient};
use crate::cli::Args;
use crate::geocoding::{Geocoder, NoGeocoder, ReverseGeocodingClient};
use crate::warn_if_env_var_is_missing;
use env::GOOGLE_MAPS_API_KEY;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub mod env;

/// The external collaborators every session talks to.
#[derive(Clone)]
pub struct Services {
    pub imagery: Arc<dyn ImageryService>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl Services {
    pub fn disabled() -> Self {
        Self {
            imagery: Arc::new(NoImagery),
            geocoder: Arc::new(NoGeocoder),
        }
    }
}

pub fn init(args: &Args) -> Services {
    warn_if_env_var_is_missing!(
        GOOGLE_MAPS_API_KEY,
        "Every spot will use the map view and a placeholder place name."
    );
    let Ok(api_key) = std::env::var(GOOGLE_MAPS_API_KEY) else {
        return Services::disabled();
    };
    let http_client = match Client::builder()
        .timeout(Duration::from_millis(args.service_timeout_ms))
        .build()
    {
        Ok(http_client) => http_client,
        Err(err) => {
            tracing::error!("Failed to build the HTTP client, external lookups are off: {err}");
            return Services::disabled();
        }
    };
    tracing::info!("Initialized imagery and reverse geocoding clients.");
    Services {
        imagery: Arc::new(StreetViewMetadataClient::new(
            http_client.clone(),
            args.imagery_base_url.clone(),
            api_key.clone(),
        )),
        geocoder: Arc::new(ReverseGeocodingClient::new(
            http_client,
            args.geocoding_base_url.clone(),
            api_key,
        )),
    }
}
