use serde::{Deserialize, Serialize};

/// Identifies one sampling request. Results tagged with an older generation are stale.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// Status codes of the Street View metadata endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageryStatus {
    Ok,
    ZeroResults,
    NotFound,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl ImageryStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => ImageryStatus::Ok,
            "ZERO_RESULTS" => ImageryStatus::ZeroResults,
            "NOT_FOUND" => ImageryStatus::NotFound,
            "OVER_QUERY_LIMIT" => ImageryStatus::OverQueryLimit,
            "REQUEST_DENIED" => ImageryStatus::RequestDenied,
            "INVALID_REQUEST" => ImageryStatus::InvalidRequest,
            "UNKNOWN_ERROR" => ImageryStatus::UnknownError,
            other => ImageryStatus::Other(other.to_string()),
        }
    }

    /// Only `OK` means there is imagery to show.
    pub fn is_available(&self) -> bool {
        *self == ImageryStatus::Ok
    }
}

#[derive(Debug, Deserialize)]
pub struct MetadataResponse {
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageryError {
    #[error("imagery metadata request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("imagery lookups are disabled")]
    Disabled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied { available: bool },
    /// A newer request superseded this one. Nothing was written.
    Stale,
}
