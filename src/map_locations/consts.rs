use std::ops::RangeInclusive;

pub const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LNG_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Road-snapped points sit on the road, so imagery (if any) is right there.
pub const ROAD_SEARCH_RADIUS_M: u32 = 50;
pub const LAND_SEARCH_RADIUS_M: u32 = 1000;
