//! Per-conversation session storage.
//!
//! One [`Session`] per conversation key, behind its own async mutex. The
//! engine holds that mutex for the full handling of one inbound event —
//! including awaited store calls — which serializes events per key while
//! leaving other conversations untouched.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use psiko_core::models::profile::SessionProfile;

use crate::state::ConversationState;

/// One conversation's in-memory state: the accumulating profile plus the
/// current state-machine position.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: SessionProfile,
    pub state: ConversationState,
}

impl Session {
    /// Discard everything, returning the session to its pristine rest state.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

/// All live sessions, keyed by conversation/user identity.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: DashMap<i64, Arc<Mutex<Session>>>,
}

impl SessionRegistry {
    pub fn new() -> SessionRegistry {
        SessionRegistry::default()
    }

    /// The session cell for a key, created lazily on first interaction.
    pub fn get_or_create(&self, key: i64) -> Arc<Mutex<Session>> {
        self.inner.entry(key).or_default().clone()
    }

    /// Drop a session entirely (session-layer expiry).
    pub fn remove(&self, key: i64) {
        self.inner.remove(&key);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
