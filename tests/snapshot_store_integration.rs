//! Behavioural integration tests for the directory snapshot store.
//!
//! These tests run the filesystem adapter against real temporary
//! directories, verifying the on-disk file contract and that a board
//! survives the session being torn down and reopened.

use std::sync::Arc;

use camino::Utf8Path;
use corkboard::board::adapters::DirSnapshotStore;
use corkboard::board::domain::{BoardStore, ColumnId, Command, TaskDraft};
use corkboard::board::ports::{SnapshotStore, SnapshotStoreError};
use corkboard::board::services::BoardSession;
use corkboard::board::snapshot::{EXPORT_FILE_NAME, STORE_FILE_NAME};
use mockable::DefaultClock;
use tempfile::TempDir;

fn utf8_path(dir: &TempDir) -> &Utf8Path {
    Utf8Path::from_path(dir.path()).unwrap_or_else(|| panic!("temp path should be UTF-8"))
}

#[tokio::test(flavor = "multi_thread")]
async fn load_returns_none_on_an_empty_directory() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open");

    let loaded = store.load().await.expect("load should succeed");

    assert!(loaded.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn save_then_load_round_trips_through_the_store_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open");

    let mut board = BoardStore::new(DefaultClock);
    board
        .add_task(
            &ColumnId::new("todo"),
            TaskDraft::new("Buy milk").with_tags(vec!["errand".to_owned()]),
        )
        .expect("task creation should succeed");
    let state = board.snapshot();

    store.save(&state).await.expect("save should succeed");

    let payload = std::fs::read_to_string(dir.path().join(STORE_FILE_NAME))
        .expect("store file should exist");
    assert!(
        !payload.contains('\n'),
        "live snapshot should be compact JSON"
    );

    let loaded = store.load().await.expect("load should succeed");
    assert_eq!(loaded, Some(state));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_overwrites_the_previous_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open");

    let mut board = BoardStore::new(DefaultClock);
    store
        .save(&board.snapshot())
        .await
        .expect("save should succeed");

    board
        .add_column("Blocked")
        .expect("column creation should succeed");
    let newer = board.snapshot();
    store.save(&newer).await.expect("save should succeed");

    let loaded = store.load().await.expect("load should succeed");
    assert_eq!(loaded, Some(newer));
}

#[tokio::test(flavor = "multi_thread")]
async fn export_writes_indented_json_to_its_own_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let store = DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open");
    let board = BoardStore::new(DefaultClock);

    store
        .export(&board.snapshot())
        .await
        .expect("export should succeed");

    let payload = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME))
        .expect("export file should exist");
    assert!(payload.contains("\n  \"columns\""));
    assert!(
        !dir.path().join(STORE_FILE_NAME).exists(),
        "an export must not touch the live snapshot"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn open_rejects_a_missing_directory() {
    let dir = TempDir::new().expect("temp dir should be created");
    let missing = Utf8Path::from_path(dir.path())
        .unwrap_or_else(|| panic!("temp path should be UTF-8"))
        .join("not-there");

    let result = DirSnapshotStore::open(&missing);

    assert!(matches!(result, Err(SnapshotStoreError::Storage(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn an_unreadable_payload_is_a_format_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    std::fs::write(dir.path().join(STORE_FILE_NAME), "not json")
        .expect("seed file should be written");
    let store = DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open");

    let result = store.load().await;

    assert!(matches!(result, Err(SnapshotStoreError::Format(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn a_board_survives_session_teardown() {
    let dir = TempDir::new().expect("temp dir should be created");

    {
        let snapshots = Arc::new(
            DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open"),
        );
        let mut session = BoardSession::open(snapshots, DefaultClock).await;
        session
            .execute(Command::AddTask {
                column_id: ColumnId::new("todo"),
                draft: TaskDraft::new("Carry over"),
            })
            .await
            .expect("command should succeed");
        session
            .execute(Command::ToggleTheme)
            .await
            .expect("command should succeed");
    }

    let snapshots =
        Arc::new(DirSnapshotStore::open(utf8_path(&dir)).expect("directory should open"));
    let session = BoardSession::open(snapshots, DefaultClock).await;

    let state = session.store().state();
    assert!(state.tasks().values().any(|task| task.title() == "Carry over"));
    assert_eq!(state.theme().as_str(), "dark");
}
