use crate::map_locations::models::Coordinate;


/// Imperative handle on the external map widget, retained once it has loaded.
pub trait MapSurface: Send {
    fn set_zoom(&mut self, zoom: i32);
    fn set_tilt(&mut self, tilt: i32);
    fn set_heading(&mut self, heading: i32);
    fn pan_to(&mut self, coordinate: Coordinate);
    fn set_center(&mut self, coordinate: Coordinate);
}

/// Stands in for the widget on the server: every camera command goes to the trace log.
pub struct TracingSurface {
    session_id: String,
}

impl TracingSurface {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

impl MapSurface for TracingSurface {
    fn set_zoom(&mut self, zoom: i32) {
        tracing::trace!(task = "surface", session_id = %self.session_id, zoom);
    }

    fn set_tilt(&mut self, tilt: i32) {
        tracing::trace!(task = "surface", session_id = %self.session_id, tilt);
    }

    fn set_heading(&mut self, heading: i32) {
        tracing::trace!(task = "surface", session_id = %self.session_id, heading);
    }

    fn pan_to(&mut self, coordinate: Coordinate) {
        tracing::trace!(task = "surface", session_id = %self.session_id, pan_to = %coordinate);
    }

    fn set_center(&mut self, coordinate: Coordinate) {
        tracing::trace!(task = "surface", session_id = %self.session_id, center = %coordinate);
    }
}
