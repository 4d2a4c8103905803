//! Port for snapshot persistence and user-facing export.

use crate::board::domain::BoardState;
use crate::board::snapshot::SnapshotError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Persistence contract for board snapshots.
///
/// An implementation keeps exactly one live snapshot, where the most
/// recent save wins, plus a separate user-facing export target. Loading
/// hands back the parsed but unvalidated state; deciding whether to adopt
/// it belongs to the board store.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the persisted snapshot, if one exists.
    ///
    /// Returns `None` when nothing has been persisted yet; a fresh
    /// environment is the normal first run, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Format`] when a stored payload does
    /// not parse and [`SnapshotStoreError::Storage`] when the backing
    /// medium fails.
    async fn load(&self) -> SnapshotStoreResult<Option<BoardState>>;

    /// Persists the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Format`] when the state cannot be
    /// encoded and [`SnapshotStoreError::Storage`] when the backing medium
    /// fails.
    async fn save(&self, state: &BoardState) -> SnapshotStoreResult<()>;

    /// Writes the snapshot to the user-facing export target.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Format`] when the state cannot be
    /// encoded and [`SnapshotStoreError::Storage`] when the backing medium
    /// fails.
    async fn export(&self, state: &BoardState) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The snapshot could not be encoded or parsed.
    #[error("snapshot format error: {0}")]
    Format(#[from] SnapshotError),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
