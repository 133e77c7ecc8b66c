use crate::availability::models::Generation;
use crate::camera::animator::{Phase, Transition};
use crate::camera::consts::RESTING_ZOOM;
use crate::cli::Args;
use crate::map_locations::models::Coordinate;
use crate::view::models::{Availability, ViewMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub resting_zoom: i32,
    pub three_d: bool,
    pub transition: Transition,
}

impl SessionSettings {
    pub fn new(three_d: bool) -> Self {
        Self {
            resting_zoom: RESTING_ZOOM,
            three_d,
            transition: Transition::for_mode(three_d),
        }
    }

    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self::new(args.three_d);
        settings.transition.step_interval = Duration::from_millis(args.step_interval_ms);
        settings
    }
}

/// What the hosting page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub generation: Generation,
    pub coordinate: Coordinate,
    pub zoom: i32,
    pub tilt: i32,
    pub heading: i32,
    pub mode: ViewMode,
    pub availability: Availability,
    pub availability_known: bool,
    pub can_toggle_mode: bool,
    pub phase: Phase,
    pub place_label: Option<String>,
    pub items: Vec<String>,
}
