//! Filesystem snapshot store over a capability-scoped directory.

use crate::board::domain::BoardState;
use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use crate::board::snapshot::{self, EXPORT_FILE_NAME, STORE_FILE_NAME};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Snapshot store writing JSON files into a single directory.
///
/// The live snapshot is kept in [`STORE_FILE_NAME`] as compact JSON; user
/// exports land in [`EXPORT_FILE_NAME`] as indented JSON. Access is
/// capability-scoped, so the store can touch nothing outside the directory
/// it was opened on.
#[derive(Debug)]
pub struct DirSnapshotStore {
    dir: Dir,
}

impl DirSnapshotStore {
    /// Opens a store over an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the directory cannot be
    /// opened.
    pub fn open(path: &Utf8Path) -> SnapshotStoreResult<Self> {
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(SnapshotStoreError::storage)?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl SnapshotStore for DirSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<BoardState>> {
        let payload = match self.dir.read_to_string(STORE_FILE_NAME) {
            Ok(payload) => payload,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotStoreError::storage(err)),
        };
        Ok(Some(snapshot::from_json(&payload)?))
    }

    async fn save(&self, state: &BoardState) -> SnapshotStoreResult<()> {
        let payload = snapshot::to_json(state)?;
        self.dir
            .write(STORE_FILE_NAME, payload)
            .map_err(SnapshotStoreError::storage)
    }

    async fn export(&self, state: &BoardState) -> SnapshotStoreResult<()> {
        let payload = snapshot::to_json_pretty(state)?;
        self.dir
            .write(EXPORT_FILE_NAME, payload)
            .map_err(SnapshotStoreError::storage)
    }
}
