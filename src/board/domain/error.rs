//! Error types for board commands.

use super::{ColumnId, TaskId};
use crate::board::snapshot::SnapshotError;
use thiserror::Error;

/// Broad classification of a [`BoardError`].
///
/// Callers that do not care which precise rule failed can branch on the
/// kind alone, for example to decide between a form-level message and a
/// stale-reference retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// A required input was missing, empty, or malformed.
    InvalidInput,
    /// An operation referenced a task or column that does not exist.
    NotFound,
    /// A snapshot could not be parsed or failed structural validation.
    InvalidFormat,
}

/// Errors raised by board commands.
///
/// Commands validate before mutating, so any of these errors guarantees
/// the board state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A task was created with an empty or whitespace-only title.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A column was created with an empty or whitespace-only title.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// A task was created into a column that does not exist.
    ///
    /// Creation treats a dangling column reference as bad input rather
    /// than a lookup failure, so this classifies as
    /// [`BoardErrorKind::InvalidInput`] where [`BoardError::ColumnNotFound`]
    /// does not.
    #[error("cannot create task: no such column: {0}")]
    UnknownTaskColumn(ColumnId),

    /// A command referenced a column that does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// A command referenced a task that does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A move named a source column that does not contain the task.
    #[error("task {task_id} is not in column {column_id}")]
    TaskNotInColumn {
        /// The task being moved.
        task_id: TaskId,
        /// The column the caller believed held the task.
        column_id: ColumnId,
    },

    /// A snapshot failed parsing or structural validation.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

impl BoardError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::EmptyTaskTitle | Self::EmptyColumnTitle | Self::UnknownTaskColumn(_) => {
                BoardErrorKind::InvalidInput
            }
            Self::ColumnNotFound(_) | Self::TaskNotFound(_) | Self::TaskNotInColumn { .. } => {
                BoardErrorKind::NotFound
            }
            Self::InvalidSnapshot(_) => BoardErrorKind::InvalidFormat,
        }
    }
}

/// Result alias for board command outcomes.
pub type BoardResult<T> = Result<T, BoardError>;
