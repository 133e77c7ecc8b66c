use serde::{Deserialize, Serialize};

/// Shown when the place can't be named.
pub const PLACEHOLDER_LABEL: &str = "Somewhere on Earth";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceName {
    pub locality: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl PlaceName {
    /// `"Locality, Region, Country"` with missing parts skipped.
    pub fn label(&self) -> Option<String> {
        let parts = [&self.locality, &self.region, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("reverse geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("reverse geocoding answered with `{0}`")]
    Status(String),
    #[error("nothing is known about this place")]
    NoResults,
    #[error("reverse geocoding is disabled")]
    Disabled,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl GeocodeResponse {
    pub fn into_place_name(self) -> Result<PlaceName, GeocodeError> {
        match self.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Err(GeocodeError::NoResults),
            other => return Err(GeocodeError::Status(other.to_string())),
        }
        let components = self
            .results
            .into_iter()
            .next()
            .map(|result| result.address_components)
            .ok_or(GeocodeError::NoResults)?;
        let find = |wanted: &[&str]| {
            wanted.iter().find_map(|wanted| {
                components
                    .iter()
                    .find(|component| component.types.iter().any(|kind| kind == wanted))
                    .map(|component| component.long_name.clone())
            })
        };
        let place = PlaceName {
            locality: find(&["locality", "postal_town", "administrative_area_level_2"]),
            region: find(&["administrative_area_level_1"]),
            country: find(&["country"]),
        };
        if place.label().is_none() {
            return Err(GeocodeError::NoResults);
        }
        Ok(place)
    }
}

pub fn label_or_placeholder(outcome: Result<PlaceName, GeocodeError>) -> String {
    match outcome {
        Ok(place) => place
            .label()
            .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string()),
        Err(err) => {
            tracing::debug!("Reverse geocoding failed, using the placeholder: {err}");
            PLACEHOLDER_LABEL.to_string()
        }
    }
}
