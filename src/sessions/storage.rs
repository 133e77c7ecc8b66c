use crate::sessions::consts::{IDLE_SWEEP_INTERVAL, SESSION_ID_LENGTH};
use crate::sessions::driver::SessionHandle;
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

struct StoredSession {
    handle: SessionHandle,
    last_seen: Instant,
}

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, StoredSession>>>,
}

impl HashMapSessionsStorage {
    /// Picks a fresh id and stores the handle `open` builds for it.
    pub async fn insert_with<F>(&self, open: F) -> (String, SessionHandle)
    where
        F: FnOnce(&str) -> SessionHandle,
    {
        let mut storage_guard = self.storage.write().await;
        let session_id = loop {
            let candidate = generate_session_id();
            if !storage_guard.contains_key(&candidate) {
                break candidate;
            }
        };
        let handle = open(&session_id);
        storage_guard.insert(
            session_id.clone(),
            StoredSession {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        (session_id, handle)
    }

    /// Counts as activity: the session won't be swept for another idle period.
    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        let mut storage_guard = self.storage.write().await;
        let stored = storage_guard.get_mut(session_id)?;
        stored.last_seen = Instant::now();
        Some(stored.handle.clone())
    }

    /// Dropping the last handle stops the session's driver.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.storage.write().await.remove(session_id).is_some()
    }

    pub async fn remove_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut storage_guard = self.storage.write().await;
        let before = storage_guard.len();
        storage_guard.retain(|_, stored| now.duration_since(stored.last_seen) < max_idle);
        before - storage_guard.len()
    }

    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }
}

/// Periodically forgets sessions nobody has touched for `max_idle`.
pub fn spawn_idle_sweep(sessions: HashMapSessionsStorage, max_idle: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(IDLE_SWEEP_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let removed = sessions.remove_idle(max_idle).await;
            if removed > 0 {
                let open_sessions = sessions.len().await;
                tracing::info!(task = "idle_sweep", removed, open_sessions);
            }
        }
    })
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}
