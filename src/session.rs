//! Per-session conversation state
//!
//! Menu position is keyed by an explicit session id supplied by the
//! caller (or generated server-side on first contact), so concurrent
//! users never share state. Entries are created on first contact and
//! evicted after a period of inactivity.

use crate::dialogue::MenuState;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    state: MenuState,
    last_seen: Instant,
}

/// In-memory store mapping session id to menu state
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Run one dialogue turn against a session's state under a single
    /// lock: stale sessions are swept, the entry is created if absent,
    /// and `f` receives mutable access to the menu state.
    pub async fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut MenuState) -> T,
    ) -> T {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                state: MenuState::default(),
                last_seen: now,
            });
        entry.last_seen = now;

        f(&mut entry.state)
    }

    /// Current menu state of a session, if it exists and is not stale
    #[allow(dead_code)] // State query utility
    pub async fn state_of(&self, session_id: &str) -> Option<MenuState> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .filter(|entry| entry.last_seen.elapsed() < self.ttl)
            .map(|entry| entry.state)
    }

    /// Number of live sessions (stale entries included until next sweep)
    #[allow(dead_code)] // Used by tests; candidate for a stats endpoint
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
