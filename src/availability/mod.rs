use crate::view::models::{Availability, ViewMode, ViewState};
use models::{Generation, ImageryError, ImageryStatus, Resolution};

pub mod models;
pub mod service;
#[cfg(test)]
pub mod tests;

/// Decides whether detailed imagery may be shown for the current coordinate only.
#[derive(Debug, Default)]
pub struct AvailabilityGate {
    current: Generation,
}

impl AvailabilityGate {
    pub fn current(&self) -> Generation {
        self.current
    }

    /// Starts a new generation. Until it resolves nothing is claimed about imagery.
    pub fn begin(&mut self, view: &mut ViewState) -> Generation {
        self.current = self.current.next();
        view.availability = Availability::Pending;
        view.mode = ViewMode::Fallback;
        self.current
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.current
    }

    /// Errors count as "unavailable".
    pub fn resolve(
        &self,
        view: &mut ViewState,
        generation: Generation,
        outcome: Result<ImageryStatus, ImageryError>,
    ) -> Resolution {
        if !self.is_current(generation) {
            return Resolution::Stale;
        }
        let available = match outcome {
            Ok(status) => status.is_available(),
            Err(err) => {
                tracing::debug!("Imagery lookup failed, falling back to the map view: {err}");
                false
            }
        };
        if available {
            view.availability = Availability::Available;
            view.mode = ViewMode::Detailed;
        } else {
            view.availability = Availability::Unavailable;
            view.mode = ViewMode::Fallback;
        }
        Resolution::Applied { available }
    }

    /// No-op unless detailed imagery was confirmed for the current coordinate.
    pub fn toggle(&self, view: &mut ViewState) -> bool {
        if !view.can_toggle_mode() {
            return false;
        }
        view.mode = match view.mode {
            ViewMode::Detailed => ViewMode::Fallback,
            ViewMode::Fallback => ViewMode::Detailed,
        };
        true
    }
}
