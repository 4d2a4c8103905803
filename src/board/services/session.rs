//! Session service wiring a board store to snapshot persistence.

use crate::board::domain::{Applied, BoardResult, BoardStore, Command};
use crate::board::ports::{SnapshotStore, SnapshotStoreResult};
use mockable::Clock;
use std::sync::Arc;

/// A live board session: one store, one persistence target.
///
/// The session owns the single-writer store and saves a snapshot after
/// every successful command, mirroring the save-on-every-change behaviour
/// of the board's storage contract. Persistence failures never take the
/// board down; they are logged and the session keeps operating in memory.
pub struct BoardSession<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: BoardStore<C>,
    snapshots: Arc<S>,
}

impl<S, C> BoardSession<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Opens a session, hydrating from the persisted snapshot.
    ///
    /// A missing snapshot is the normal first run and yields a fresh
    /// default board. A snapshot that fails to load, parse, or validate is
    /// logged and discarded rather than taking the session down, and the
    /// session starts fresh in that case too.
    pub async fn open(snapshots: Arc<S>, clock: C) -> Self {
        let mut store = BoardStore::new(clock);
        match snapshots.load().await {
            Ok(Some(state)) => {
                if let Err(err) = store.load_snapshot(state) {
                    tracing::warn!(error = %err, "persisted snapshot rejected; starting fresh");
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "could not load persisted snapshot; starting fresh");
            }
        }
        Self { store, snapshots }
    }

    /// Applies a command and persists the resulting state.
    ///
    /// Saving is fire-and-forget: when the snapshot store fails, the
    /// failure is logged and the command still succeeds, since in-memory
    /// state must never roll back over a persistence problem.
    ///
    /// # Errors
    ///
    /// Returns the command's own error with the state unchanged; nothing
    /// is persisted in that case.
    pub async fn execute(&mut self, command: Command) -> BoardResult<Applied> {
        let applied = self.store.apply(command)?;
        if let Err(err) = self.snapshots.save(self.store.state()).await {
            tracing::warn!(error = %err, "could not persist snapshot after command");
        }
        Ok(applied)
    }

    /// Writes the current state to the user-facing export target.
    ///
    /// # Errors
    ///
    /// Returns the snapshot store's error; the in-memory board is
    /// unaffected either way.
    pub async fn export(&self) -> SnapshotStoreResult<()> {
        self.snapshots.export(self.store.state()).await
    }

    /// Returns the store for reads and derived queries.
    #[must_use]
    pub const fn store(&self) -> &BoardStore<C> {
        &self.store
    }
}
