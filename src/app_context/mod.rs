use crate::pools::Pools;
use crate::sampling::Sampler;
use crate::services::Services;
use crate::sessions::driver::{self, SessionHandle};
use crate::sessions::models::SessionSettings;
use crate::sessions::session::Session;
use crate::sessions::storage::HashMapSessionsStorage;
use crate::surface::TracingSurface;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    /// `None` when the pools failed to load: the page still works, spots don't.
    pub pools: Option<Arc<Pools>>,
    pub services: Services,
    pub settings: SessionSettings,
    pub sessions: HashMapSessionsStorage,
}

impl AppContext {
    pub async fn open_session(&self) -> (String, SessionHandle) {
        self.sessions
            .insert_with(|session_id| {
                let mut session = Session::new(
                    self.pools.clone(),
                    Sampler::from_entropy(),
                    self.settings,
                );
                session.attach_surface(Box::new(TracingSurface::new(session_id)));
                driver::spawn(session, self.services.clone())
            })
            .await
    }
}

pub fn init(pools: Option<Pools>, services: Services, settings: SessionSettings) -> AppContext {
    AppContext {
        pools: pools.map(Arc::new),
        services,
        settings,
        sessions: HashMapSessionsStorage::default(),
    }
}
