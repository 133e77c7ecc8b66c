use std::time::Duration;

pub const RESTING_ZOOM: i32 = 5;
/// Tilted imagery needs a close zoom, so 3-D spots end closer in.
pub const FINAL_ZOOM_3D: i32 = 18;
pub const FINAL_ZOOM_FLAT: i32 = 16;
pub const DEFAULT_STEP_SIZE: i32 = 1;
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_TILT: i32 = 45;
pub const DEFAULT_HEADING: i32 = 90;
