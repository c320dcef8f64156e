//! Session registry: the shared conversation plus caller-named ones.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parley_ai::Session;
use parley_common::SessionId;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A conversation behind its own lock. Turns on one session run one at a
/// time, in the order the lock is requested.
pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    session: SessionHandle,
    last_used: Instant,
}

impl Entry {
    /// A handle is held outside the registry while a turn is in flight.
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.session) > 1
    }
}

/// Thread-safe session registry.
///
/// Callers that send no session id all talk to the shared session, which
/// lives as long as the process. Named sessions are created on first use,
/// dropped after sitting idle, and evicted least-recently-used first when
/// the registry is full.
#[derive(Clone)]
pub struct SessionRegistry {
    shared: SessionHandle,
    named: Arc<RwLock<HashMap<SessionId, Entry>>>,
    system_prompt: Option<Arc<str>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(system_prompt: Option<String>, max_sessions: usize) -> Self {
        let system_prompt: Option<Arc<str>> = system_prompt.map(Into::into);
        Self {
            shared: Arc::new(Mutex::new(new_session(system_prompt.as_deref()))),
            named: Arc::new(RwLock::new(HashMap::new())),
            system_prompt,
            max_sessions: max_sessions.max(1),
        }
    }

    /// The process-wide session used when the caller names none.
    pub fn shared(&self) -> SessionHandle {
        self.shared.clone()
    }

    /// Get the session named `id`, creating it if needed.
    pub async fn get_or_create(&self, id: &SessionId) -> SessionHandle {
        let mut map = self.named.write().await;
        let now = Instant::now();

        if let Some(entry) = map.get_mut(id) {
            entry.last_used = now;
            return entry.session.clone();
        }

        if map.len() >= self.max_sessions {
            evict_least_recent(&mut map);
        }

        let session: SessionHandle =
            Arc::new(Mutex::new(new_session(self.system_prompt.as_deref())));
        map.insert(
            id.clone(),
            Entry {
                session: session.clone(),
                last_used: now,
            },
        );
        tracing::debug!(session = %id, sessions = map.len(), "Session created");
        session
    }

    /// Drop named sessions idle for at least `ttl`. Returns how many went.
    pub async fn reap_idle(&self, ttl: Duration) -> usize {
        let mut map = self.named.write().await;
        let now = Instant::now();
        let before = map.len();
        map.retain(|id, entry| {
            let idle = !entry.in_use() && now.duration_since(entry.last_used) >= ttl;
            if idle {
                tracing::info!(session = %id, "Reaping idle session");
            }
            !idle
        });
        before - map.len()
    }

    /// Number of named sessions.
    pub async fn count(&self) -> usize {
        self.named.read().await.len()
    }

    /// Start a background task that reaps sessions idle for `ttl`, checking
    /// every `interval`.
    pub fn spawn_reaper(&self, ttl: Duration, interval: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let reaped = store.reap_idle(ttl).await;
                let count = store.count().await;
                tracing::debug!(reaped, sessions = count, "Reaper tick");
            }
        })
    }
}

fn new_session(system_prompt: Option<&str>) -> Session {
    match system_prompt {
        Some(prompt) => Session::new().with_system_prompt(prompt),
        None => Session::new(),
    }
}

/// Remove the least recently used session that has no turn in flight.
/// If every session is busy the map is left to grow past capacity.
fn evict_least_recent(map: &mut HashMap<SessionId, Entry>) {
    let victim = map
        .iter()
        .filter(|(_, entry)| !entry.in_use())
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(id, _)| id.clone());

    if let Some(id) = victim {
        map.remove(&id);
        tracing::info!(session = %id, "Evicted least recently used session");
    }
}
