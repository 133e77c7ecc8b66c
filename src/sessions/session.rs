use crate::availability::models::{Generation, ImageryError, ImageryStatus, Resolution};
use crate::availability::AvailabilityGate;
use crate::camera::animator::{CameraAnimator, TickOutcome};
use crate::camera::timers::TimerHandle;
use crate::geocoding::models::{label_or_placeholder, GeocodeError, PlaceName};
use crate::map_locations::models::Coordinate;
use crate::pools::Pools;
use crate::sampling::{SampleError, Sampler};
use crate::sessions::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::sessions::models::{SessionSettings, ViewSnapshot};
use crate::surface::MapSurface;
use crate::view::models::ViewState;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("sampling is unavailable because the pools failed to load")]
    SamplingUnavailable,
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("the session is no longer running")]
    Closed,
}

/// What the driver needs to start the asynchronous side of a new spot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpotRequest {
    pub generation: Generation,
    pub coordinate: Coordinate,
    pub search_radius_m: u32,
    pub stepper: TimerHandle,
    pub step_interval: Duration,
}

/// One visitor's page: the only owner of its `ViewState`.
pub struct Session<R: Rng = StdRng> {
    pools: Option<Arc<Pools>>,
    sampler: Sampler<R>,
    settings: SessionSettings,
    view: ViewState,
    animator: CameraAnimator,
    gate: AvailabilityGate,
    items: Vec<String>,
    place_label: Option<String>,
    surface: Option<Box<dyn MapSurface>>,
}

impl<R: Rng> Session<R> {
    pub fn new(pools: Option<Arc<Pools>>, sampler: Sampler<R>, settings: SessionSettings) -> Self {
        Self {
            pools,
            sampler,
            settings,
            view: ViewState::resting(Coordinate::new(0.0, 0.0), settings.resting_zoom),
            animator: CameraAnimator::new(settings.resting_zoom, settings.three_d),
            gate: AvailabilityGate::default(),
            items: Vec::new(),
            place_label: None,
            surface: None,
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[cfg(test)]
    pub fn generation(&self) -> Generation {
        self.gate.current()
    }

    #[cfg(test)]
    pub fn active_timers(&self) -> usize {
        self.animator.active_timers()
    }

    /// Samples a new spot, supersedes everything in flight and starts the zoom-in.
    pub fn request_new_spot(&mut self) -> Result<SpotRequest, SessionError> {
        let pools = self
            .pools
            .clone()
            .ok_or(SessionError::SamplingUnavailable)?;
        let coordinate = self.sampler.sample_coordinate(pools.locations.as_slice())?;
        let items = self
            .sampler
            .sample_pick_n(pools.items.as_slice(), pools.items_per_spot)?;

        let generation = self.gate.begin(&mut self.view);
        let stepper =
            self.animator
                .begin_transition(&mut self.view, coordinate, self.settings.transition);
        self.items = items;
        self.place_label = None;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_center(coordinate);
            surface.set_zoom(self.view.zoom);
            surface.set_tilt(self.view.tilt);
            surface.set_heading(self.view.heading);
        }
        tracing::info!(
            task = "new_spot",
            generation = generation.0,
            lat = coordinate.lat,
            lng = coordinate.lng,
        );
        Ok(SpotRequest {
            generation,
            coordinate,
            search_radius_m: pools.locations.kind().search_radius_m(),
            stepper,
            step_interval: self.settings.transition.step_interval,
        })
    }

    pub fn on_tick(&mut self, stepper: TimerHandle) -> TickOutcome {
        let outcome = self.animator.tick(&mut self.view, stepper);
        match outcome {
            TickOutcome::Stepped { zoom } => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_zoom(zoom);
                }
            }
            TickOutcome::Settled { zoom } => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_zoom(zoom);
                }
                tracing::info!(
                    task = "transition_settled",
                    generation = self.gate.current().0,
                    zoom,
                );
                self.refresh_pose();
            }
            TickOutcome::Stale => {
                tracing::debug!(task = "stale_result_discarded", kind = "tick");
            }
        }
        outcome
    }

    pub fn on_availability(
        &mut self,
        generation: Generation,
        outcome: Result<ImageryStatus, ImageryError>,
    ) -> Resolution {
        let resolution = self.gate.resolve(&mut self.view, generation, outcome);
        match resolution {
            Resolution::Applied { available } => {
                tracing::info!(
                    task = "availability_resolved",
                    generation = generation.0,
                    available,
                );
                self.refresh_pose();
            }
            Resolution::Stale => {
                tracing::debug!(
                    task = "stale_result_discarded",
                    kind = "availability",
                    generation = generation.0,
                    current = self.gate.current().0,
                );
            }
        }
        resolution
    }

    /// Returns `false` if the result belongs to a superseded spot.
    pub fn on_geocoded(
        &mut self,
        generation: Generation,
        outcome: Result<PlaceName, GeocodeError>,
    ) -> bool {
        if !self.gate.is_current(generation) {
            tracing::debug!(
                task = "stale_result_discarded",
                kind = "geocoding",
                generation = generation.0,
            );
            return false;
        }
        self.place_label = Some(label_or_placeholder(outcome));
        true
    }

    pub fn toggle_mode(&mut self) -> bool {
        self.gate.toggle(&mut self.view)
    }

    /// Jumps straight to `zoom` over the current spot.
    pub fn zoom_in(&mut self, zoom: i32) {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let coordinate = self.view.coordinate;
        self.animator.jump_to(&mut self.view, zoom, coordinate);
        if let Some(surface) = self.surface.as_mut() {
            surface.pan_to(coordinate);
            surface.set_zoom(zoom);
        }
        self.refresh_pose();
    }

    /// The widget's `onLoad`: keep the handle and bring it up to date.
    pub fn attach_surface(&mut self, mut surface: Box<dyn MapSurface>) {
        surface.set_center(self.view.coordinate);
        surface.set_zoom(self.view.zoom);
        surface.set_tilt(self.view.tilt);
        surface.set_heading(self.view.heading);
        self.surface = Some(surface);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            generation: self.gate.current(),
            coordinate: self.view.coordinate,
            zoom: self.view.zoom,
            tilt: self.view.tilt,
            heading: self.view.heading,
            mode: self.view.mode,
            availability: self.view.availability,
            availability_known: self.view.availability_known(),
            can_toggle_mode: self.view.can_toggle_mode(),
            phase: self.animator.phase(),
            place_label: self.place_label.clone(),
            items: self.items.clone(),
        }
    }

    fn refresh_pose(&mut self) {
        if !self.animator.apply_settled_pose(&mut self.view) {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_tilt(self.view.tilt);
            surface.set_heading(self.view.heading);
        }
    }
}
