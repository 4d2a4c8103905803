//! In-memory snapshot store for tests and ephemeral sessions.

use crate::board::domain::BoardState;
use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use crate::board::snapshot;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe snapshot store keeping JSON payloads in memory.
///
/// Payloads are held as the serialised text, not as live states, so the
/// codec is exercised exactly as it would be against real storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<InMemorySnapshotState>>,
}

#[derive(Debug, Default)]
struct InMemorySnapshotState {
    saved: Option<String>,
    exported: Option<String>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw payload of the most recent save, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the lock is poisoned.
    pub fn saved_payload(&self) -> SnapshotStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.saved.clone())
    }

    /// Returns the raw payload of the most recent export, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the lock is poisoned.
    pub fn exported_payload(&self) -> SnapshotStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.exported.clone())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<BoardState>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.saved.as_deref().map(snapshot::from_json).transpose()?)
    }

    async fn save(&self, state: &BoardState) -> SnapshotStoreResult<()> {
        let payload = snapshot::to_json(state)?;
        let mut stored = self.state.write().map_err(|err| {
            SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        stored.saved = Some(payload);
        Ok(())
    }

    async fn export(&self, state: &BoardState) -> SnapshotStoreResult<()> {
        let payload = snapshot::to_json_pretty(state)?;
        let mut stored = self.state.write().map_err(|err| {
            SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        stored.exported = Some(payload);
        Ok(())
    }
}
