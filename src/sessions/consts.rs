use std::time::Duration;

pub const SESSION_ID_LENGTH: usize = 12;
pub const IDLE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
pub const MIN_ZOOM: i32 = 0;
pub const MAX_ZOOM: i32 = 22;
pub const SAMPLING_UNAVAILABLE_MESSAGE: &str =
    "We can't pick a spot for you right now. Please come back a bit later.";
