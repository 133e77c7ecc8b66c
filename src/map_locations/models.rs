use crate::map_locations::consts::{
    LAND_SEARCH_RADIUS_M, LAT_RANGE, LNG_RANGE, ROAD_SEARCH_RADIUS_M,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the visitor is "standing". Degrees, WGS84.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_in_range(&self) -> bool {
        LAT_RANGE.contains(&self.lat) && LNG_RANGE.contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// What the points of a pool are known to be.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PoolKind {
    /// Somewhere on land, not necessarily near anything.
    #[default]
    Land,
    /// Snapped to the nearest road or path.
    Road,
}

impl PoolKind {
    pub fn search_radius_m(self) -> u32 {
        match self {
            PoolKind::Land => LAND_SEARCH_RADIUS_M,
            PoolKind::Road => ROAD_SEARCH_RADIUS_M,
        }
    }
}

/// One entry of a locations file: either a bare `[lat, lng]` pair or an object.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCoordinate {
    Pair(f64, f64),
    Object(Coordinate),
}

impl From<RawCoordinate> for Coordinate {
    fn from(raw: RawCoordinate) -> Self {
        match raw {
            RawCoordinate::Pair(lat, lng) => Coordinate { lat, lng },
            RawCoordinate::Object(coordinate) => coordinate,
        }
    }
}
