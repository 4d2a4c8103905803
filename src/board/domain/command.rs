//! The closed command set accepted by the board store.

use super::{BoardState, ColumnId, TaskDraft, TaskId, TaskPatch, Theme};

/// A named state transition.
///
/// Commands are the only way to mutate a board. The set is closed and the
/// store's dispatch is exhaustive, so adding a variant without handling it
/// is a compile error rather than a silent fall-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a task at the end of a column.
    AddTask {
        /// Column receiving the task.
        column_id: ColumnId,
        /// Unvalidated task fields.
        draft: TaskDraft,
    },
    /// Merge field changes into an existing task.
    UpdateTask {
        /// Task to change.
        task_id: TaskId,
        /// Fields to change; absent fields stay as they are.
        patch: TaskPatch,
    },
    /// Remove a task from the map and from its column. Idempotent.
    DeleteTask {
        /// Task to remove.
        task_id: TaskId,
    },
    /// Relocate a task within or across columns.
    MoveTask(MoveTask),
    /// Create an empty column at the end of the board.
    AddColumn {
        /// Unvalidated column title.
        title: String,
    },
    /// Remove a column and cascade-delete the tasks it lists.
    DeleteColumn {
        /// Column to remove.
        column_id: ColumnId,
    },
    /// Replace the live search term.
    SetSearchTerm {
        /// New term; empty disables the search filter.
        term: String,
    },
    /// Replace the live tag filter.
    SetFilterTag {
        /// New tag; empty disables the tag filter.
        tag: String,
    },
    /// Flip between the light and dark themes.
    ToggleTheme,
    /// Replace the whole state with a snapshot, subject to validation.
    LoadSnapshot {
        /// Incoming state in the persisted form.
        snapshot: BoardState,
    },
}

/// Parameters of a [`Command::MoveTask`].
///
/// Drag-and-drop surfaces report where a card was picked up and where it
/// was dropped. Only the drop position is trusted: the store relocates the
/// task by id, so a stale `source_index` cannot corrupt ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTask {
    /// Task being relocated.
    pub task_id: TaskId,
    /// Column the task is leaving.
    pub source_column_id: ColumnId,
    /// Column the task is entering; may equal the source.
    pub dest_column_id: ColumnId,
    /// Position the caller saw the task at; advisory only, except that a
    /// move to the identical column and index is a no-op.
    pub source_index: usize,
    /// Position to insert at, interpreted against the destination list
    /// after removal and clamped to its length.
    pub dest_index: usize,
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The command succeeded without producing a value.
    Done,
    /// A task was created under this identifier.
    TaskCreated(TaskId),
    /// A column was created under this identifier.
    ColumnCreated(ColumnId),
    /// A column was removed, cascade-deleting these tasks.
    ColumnDeleted(Vec<TaskId>),
    /// The theme flipped to this value.
    ThemeToggled(Theme),
}
