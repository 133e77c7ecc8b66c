use crate::availability::models::{Generation, ImageryError, ImageryStatus};
use crate::camera::animator::TickOutcome;
use crate::camera::timers::TimerHandle;
use crate::geocoding::models::{GeocodeError, PlaceName};
use crate::map_locations::models::Coordinate;
use crate::services::Services;
use crate::sessions::models::ViewSnapshot;
use crate::sessions::session::{Session, SessionError, SpotRequest};
use rand::Rng;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_STEP_INTERVAL: Duration = Duration::from_millis(1);

pub enum SessionCommand {
    NewSpot(oneshot::Sender<Result<ViewSnapshot, SessionError>>),
    ToggleMode(oneshot::Sender<(bool, ViewSnapshot)>),
    ZoomIn {
        zoom: i32,
        reply: oneshot::Sender<ViewSnapshot>,
    },
    Snapshot(oneshot::Sender<ViewSnapshot>),
}

/// Results of the session's own background work, tagged so stale ones can be told apart.
enum SessionEvent {
    Tick(TimerHandle),
    Availability {
        generation: Generation,
        outcome: Result<ImageryStatus, ImageryError>,
    },
    Geocoded {
        generation: Generation,
        outcome: Result<PlaceName, GeocodeError>,
    },
}

/// Cloneable front door of a running session. The driver stops once every handle is gone.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub async fn new_spot(&self) -> Result<ViewSnapshot, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::NewSpot(reply))?;
        response.await.map_err(|_| SessionError::Closed)?
    }

    pub async fn toggle_mode(&self) -> Result<(bool, ViewSnapshot), SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::ToggleMode(reply))?;
        response.await.map_err(|_| SessionError::Closed)
    }

    pub async fn zoom_in(&self, zoom: i32) -> Result<ViewSnapshot, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::ZoomIn { zoom, reply })?;
        response.await.map_err(|_| SessionError::Closed)
    }

    pub async fn snapshot(&self) -> Result<ViewSnapshot, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Snapshot(reply))?;
        response.await.map_err(|_| SessionError::Closed)
    }

    fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .map_err(|_| SessionError::Closed)
    }
}

/// Runs `session` on its own task. All of its mutation happens there, one message at a time.
pub fn spawn<R>(session: Session<R>, services: Services) -> SessionHandle
where
    R: Rng + Send + 'static,
{
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let driver = SessionDriver {
        session,
        services,
        events: events_tx,
        ticker: None,
        availability_lookup: None,
        place_lookup: None,
    };
    tokio::spawn(driver.run(commands_rx, events_rx));
    SessionHandle {
        commands: commands_tx,
    }
}

struct SessionDriver<R: Rng> {
    session: Session<R>,
    services: Services,
    events: mpsc::UnboundedSender<SessionEvent>,
    ticker: Option<JoinHandle<()>>,
    availability_lookup: Option<JoinHandle<()>>,
    place_lookup: Option<JoinHandle<()>>,
}

impl<R: Rng> SessionDriver<R> {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        mut events: mpsc::UnboundedReceiver<SessionEvent>,
    ) {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(event) = events.recv() => self.handle_event(event),
            }
        }
        self.abort_background_work();
        tracing::debug!("Session driver stopped.");
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::NewSpot(reply) => {
                let result = self.session.request_new_spot().map(|request| {
                    self.start_background_work(request);
                    self.session.snapshot()
                });
                let _ = reply.send(result);
            }
            SessionCommand::ToggleMode(reply) => {
                let toggled = self.session.toggle_mode();
                let _ = reply.send((toggled, self.session.snapshot()));
            }
            SessionCommand::ZoomIn { zoom, reply } => {
                self.session.zoom_in(zoom);
                stop(&mut self.ticker);
                let _ = reply.send(self.session.snapshot());
            }
            SessionCommand::Snapshot(reply) => {
                let _ = reply.send(self.session.snapshot());
            }
        }
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Tick(stepper) => {
                if let TickOutcome::Settled { .. } = self.session.on_tick(stepper) {
                    stop(&mut self.ticker);
                }
            }
            SessionEvent::Availability {
                generation,
                outcome,
            } => {
                self.session.on_availability(generation, outcome);
            }
            SessionEvent::Geocoded {
                generation,
                outcome,
            } => {
                self.session.on_geocoded(generation, outcome);
            }
        }
    }

    fn start_background_work(&mut self, request: SpotRequest) {
        self.abort_background_work();
        self.ticker = Some(spawn_ticker(
            self.events.clone(),
            request.stepper,
            request.step_interval,
        ));
        self.availability_lookup = Some(self.spawn_availability_lookup(
            request.generation,
            request.coordinate,
            request.search_radius_m,
        ));
        self.place_lookup = Some(self.spawn_place_lookup(request.generation, request.coordinate));
    }

    fn spawn_availability_lookup(
        &self,
        generation: Generation,
        coordinate: Coordinate,
        radius_m: u32,
    ) -> JoinHandle<()> {
        let imagery = self.services.imagery.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = imagery.check_availability(coordinate, radius_m).await;
            let _ = events.send(SessionEvent::Availability {
                generation,
                outcome,
            });
        })
    }

    fn spawn_place_lookup(&self, generation: Generation, coordinate: Coordinate) -> JoinHandle<()> {
        let geocoder = self.services.geocoder.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = geocoder.reverse_geocode(coordinate).await;
            let _ = events.send(SessionEvent::Geocoded {
                generation,
                outcome,
            });
        })
    }

    fn abort_background_work(&mut self) {
        stop(&mut self.ticker);
        stop(&mut self.availability_lookup);
        stop(&mut self.place_lookup);
    }
}

fn spawn_ticker(
    events: mpsc::UnboundedSender<SessionEvent>,
    stepper: TimerHandle,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period.max(MIN_STEP_INTERVAL));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if events.send(SessionEvent::Tick(stepper)).is_err() {
                break;
            }
        }
    })
}

fn stop(task: &mut Option<JoinHandle<()>>) {
    if let Some(task) = task.take() {
        task.abort();
    }
}
