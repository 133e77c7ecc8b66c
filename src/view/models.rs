use crate::map_locations::models::Coordinate;
use serde::{Deserialize, Serialize};

/// Which of the two display modes the page shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Ground-level panoramic imagery.
    Detailed,
    /// A pin on the overhead map.
    Fallback,
}

/// What is known about detailed imagery at the current coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    Pending,
    Available,
    Unavailable,
}

/// Everything the page renders. Written only by the camera animator and the availability gate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    pub coordinate: Coordinate,
    pub zoom: i32,
    pub tilt: i32,
    pub heading: i32,
    pub mode: ViewMode,
    pub availability: Availability,
}

impl ViewState {
    pub fn resting(coordinate: Coordinate, resting_zoom: i32) -> Self {
        Self {
            coordinate,
            zoom: resting_zoom,
            tilt: 0,
            heading: 0,
            mode: ViewMode::Fallback,
            availability: Availability::Pending,
        }
    }

    pub fn availability_known(&self) -> bool {
        self.availability != Availability::Pending
    }

    pub fn can_toggle_mode(&self) -> bool {
        self.availability == Availability::Available
    }
}
