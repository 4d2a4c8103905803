//! Tests for the session service around hydration and persistence.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;

use crate::board::adapters::InMemorySnapshotStore;
use crate::board::domain::{BoardState, BoardStore, ColumnId, Command, TaskDraft};
use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use crate::board::services::BoardSession;
use crate::board::snapshot;

mockall::mock! {
    Snapshots {}

    #[async_trait::async_trait]
    impl SnapshotStore for Snapshots {
        async fn load(&self) -> SnapshotStoreResult<Option<BoardState>>;
        async fn save(&self, state: &BoardState) -> SnapshotStoreResult<()>;
        async fn export(&self, state: &BoardState) -> SnapshotStoreResult<()>;
    }
}

fn populated_state() -> BoardState {
    let mut store = BoardStore::new(DefaultClock);
    store
        .add_task(&ColumnId::new("todo"), TaskDraft::new("Buy milk"))
        .expect("task creation should succeed");
    store.snapshot()
}

fn add_column_command() -> Command {
    Command::AddColumn {
        title: "Blocked".to_owned(),
    }
}

fn disk_failure() -> SnapshotStoreError {
    SnapshotStoreError::storage(std::io::Error::other("disk on fire"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_starts_fresh_when_nothing_is_persisted() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    assert_eq!(session.store().state(), &BoardState::default());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_hydrates_the_store_from_a_persisted_snapshot() {
    let persisted = populated_state();
    let expected = persisted.clone();
    let mut snapshots = MockSnapshots::new();
    snapshots
        .expect_load()
        .times(1)
        .returning(move || Ok(Some(persisted.clone())));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    assert_eq!(session.store().state(), &expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_starts_fresh_when_loading_fails() {
    let mut snapshots = MockSnapshots::new();
    snapshots
        .expect_load()
        .times(1)
        .returning(|| Err(disk_failure()));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    assert_eq!(session.store().state(), &BoardState::default());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_discards_a_structurally_invalid_snapshot() {
    let mut value = serde_json::to_value(populated_state()).expect("state should encode");
    value["columns"][0]["taskIds"]
        .as_array_mut()
        .expect("taskIds should be an array")
        .push(serde_json::json!("task-ghost"));
    let corrupt: BoardState =
        serde_json::from_value(value).expect("edited snapshot should still parse");

    let mut snapshots = MockSnapshots::new();
    snapshots
        .expect_load()
        .times(1)
        .returning(move || Ok(Some(corrupt.clone())));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    assert_eq!(session.store().state(), &BoardState::default());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execute_saves_the_new_state_after_a_successful_command() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));
    snapshots
        .expect_save()
        .times(1)
        .withf(|state: &BoardState| {
            state
                .columns()
                .iter()
                .any(|column| column.title() == "Blocked")
        })
        .returning(|_| Ok(()));

    let mut session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    session
        .execute(add_column_command())
        .await
        .expect("command should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execute_does_not_save_when_the_command_fails() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));
    snapshots.expect_save().never();

    let mut session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    let result = session
        .execute(Command::DeleteColumn {
            column_id: ColumnId::new("column-ghost"),
        })
        .await;

    assert!(result.is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execute_still_succeeds_when_saving_fails() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));
    snapshots
        .expect_save()
        .times(1)
        .returning(|_| Err(disk_failure()));

    let mut session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    session
        .execute(add_column_command())
        .await
        .expect("a persistence failure must not fail the command");

    assert_eq!(session.store().state().columns().len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn export_writes_the_current_state() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));
    snapshots
        .expect_export()
        .times(1)
        .withf(|state: &BoardState| state == &BoardState::default())
        .returning(|_| Ok(()));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    session.export().await.expect("export should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn export_propagates_store_failures() {
    let mut snapshots = MockSnapshots::new();
    snapshots.expect_load().times(1).returning(|| Ok(None));
    snapshots
        .expect_export()
        .times(1)
        .returning(|_| Err(disk_failure()));

    let session = BoardSession::open(Arc::new(snapshots), DefaultClock).await;

    let result = session.export().await;

    assert!(matches!(result, Err(SnapshotStoreError::Storage(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_store_round_trips_through_a_session() {
    let snapshots = Arc::new(InMemorySnapshotStore::new());
    let mut session = BoardSession::open(Arc::clone(&snapshots), DefaultClock).await;

    session
        .execute(add_column_command())
        .await
        .expect("command should succeed");
    session.export().await.expect("export should succeed");

    let saved = snapshots
        .saved_payload()
        .expect("payload should be readable")
        .expect("a save should have happened");
    let restored = snapshot::from_json(&saved).expect("saved payload should parse");
    assert_eq!(&restored, session.store().state());

    let exported = snapshots
        .exported_payload()
        .expect("payload should be readable")
        .expect("an export should have happened");
    assert!(exported.contains("\n  \"columns\""));

    let rehydrated = BoardSession::open(snapshots, DefaultClock).await;
    assert_eq!(rehydrated.store().state(), session.store().state());
}

#[rstest]
fn in_memory_store_starts_empty() {
    let snapshots = InMemorySnapshotStore::new();

    assert!(snapshots.saved_payload().expect("lock is healthy").is_none());
    assert!(
        snapshots
            .exported_payload()
            .expect("lock is healthy")
            .is_none()
    );
}
