use crate::camera::consts::{
    DEFAULT_HEADING, DEFAULT_STEP_INTERVAL, DEFAULT_STEP_SIZE, DEFAULT_TILT, FINAL_ZOOM_3D,
    FINAL_ZOOM_FLAT,
};
use crate::camera::timers::{TimerArena, TimerHandle};
use crate::map_locations::models::Coordinate;
use crate::view::models::{Availability, ViewState};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Idle,
    Transitioning,
    Settled,
}

/// Parameters of one reset-then-zoom-in sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Tilt applied once settled, if the 3-D effect is eligible.
    pub rest_tilt: i32,
    pub rest_heading: i32,
    pub final_zoom: i32,
    pub step_size: i32,
    pub step_interval: Duration,
}

impl Transition {
    pub fn for_mode(three_d: bool) -> Self {
        Self {
            rest_tilt: DEFAULT_TILT,
            rest_heading: DEFAULT_HEADING,
            final_zoom: if three_d { FINAL_ZOOM_3D } else { FINAL_ZOOM_FLAT },
            step_size: DEFAULT_STEP_SIZE,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Stepped { zoom: i32 },
    Settled { zoom: i32 },
    /// The tick belongs to a cancelled or finished timer.
    Stale,
}

#[derive(Debug)]
pub struct CameraAnimator {
    resting_zoom: i32,
    three_d: bool,
    phase: Phase,
    timers: TimerArena,
    stepper: Option<TimerHandle>,
    transition: Option<Transition>,
}

impl CameraAnimator {
    pub fn new(resting_zoom: i32, three_d: bool) -> Self {
        Self {
            resting_zoom,
            three_d,
            phase: Phase::Idle,
            timers: TimerArena::default(),
            stepper: None,
            transition: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn active_timers(&self) -> usize {
        self.timers.active_count()
    }

    /// Resets the view onto `target` and starts stepping the zoom towards `transition.final_zoom`.
    /// Any in-flight stepper is cancelled first.
    pub fn begin_transition(
        &mut self,
        view: &mut ViewState,
        target: Coordinate,
        transition: Transition,
    ) -> TimerHandle {
        self.cancel();
        view.coordinate = target;
        view.zoom = self.resting_zoom;
        view.tilt = 0;
        view.heading = 0;
        let stepper = self.timers.start(transition.step_interval);
        self.stepper = Some(stepper);
        self.transition = Some(transition);
        self.phase = Phase::Transitioning;
        stepper
    }

    pub fn tick(&mut self, view: &mut ViewState, timer: TimerHandle) -> TickOutcome {
        if self.stepper != Some(timer) || !self.timers.is_active(timer) {
            return TickOutcome::Stale;
        }
        let Some(transition) = self.transition else {
            return TickOutcome::Stale;
        };
        let step = transition.step_size.max(1);
        view.zoom = view.zoom.saturating_add(step).min(transition.final_zoom);
        if view.zoom < transition.final_zoom {
            return TickOutcome::Stepped { zoom: view.zoom };
        }
        self.cancel();
        self.phase = Phase::Settled;
        TickOutcome::Settled { zoom: view.zoom }
    }

    /// Direct zoom without stepping, e.g. when the visitor clicks the marker.
    pub fn jump_to(&mut self, view: &mut ViewState, zoom: i32, coordinate: Coordinate) {
        self.cancel();
        view.zoom = zoom;
        view.coordinate = coordinate;
        self.phase = Phase::Settled;
    }

    /// Returns `true` if a running stepper was stopped.
    pub fn cancel(&mut self) -> bool {
        match self.stepper.take() {
            Some(stepper) => self.timers.cancel(stepper),
            None => false,
        }
    }

    /// Tilts the settled view into 3-D when detailed imagery is known to be missing, and
    /// flattens it otherwise. Returns `true` if tilt or heading changed.
    pub fn apply_settled_pose(&self, view: &mut ViewState) -> bool {
        let (tilt, heading) = match self.transition {
            Some(transition)
                if self.phase == Phase::Settled
                    && self.three_d
                    && view.availability == Availability::Unavailable =>
            {
                (transition.rest_tilt, transition.rest_heading)
            }
            _ => (0, 0),
        };
        let changed = view.tilt != tilt || view.heading != heading;
        view.tilt = tilt;
        view.heading = heading;
        changed
    }
}
