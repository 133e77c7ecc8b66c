use crate::sessions::models::ViewSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    pub session_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    /// Human-readable text to show instead of the map, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSnapshot>,
}

impl ViewResponse {
    pub fn ok(view: ViewSnapshot) -> Self {
        Self {
            error: false,
            error_code: None,
            message: None,
            view: Some(view),
        }
    }

    pub fn failed(error_code: SessionResponseError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            message: None,
            view: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleModeResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    /// `false` when toggling isn't allowed for the current spot.
    pub toggled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSnapshot>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionResponseError {
    SessionNotFound,
    SessionClosed,
    SamplingUnavailable,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoomInRequest {
    pub zoom: i32,
}
