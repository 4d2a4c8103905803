//! Column aggregate: a titled, ordered list of task references.

use super::{BoardError, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Seeded columns present on every fresh board, as `(id, title)` pairs.
const SEEDED_COLUMNS: [(&str, &str); 3] = [
    ("todo", "To Do"),
    ("inprogress", "In Progress"),
    ("done", "Done"),
];

/// A vertical lane on the board.
///
/// Columns hold task identifiers in display order; the tasks themselves
/// live in the board's task map. Keeping the two consistent is the
/// store's job, which is why the list mutators here never validate
/// against the task map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates a new empty column with a fresh unique identifier.
    ///
    /// The stored title is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`] when the title is empty or
    /// whitespace-only.
    pub fn from_title(title: impl Into<String>) -> Result<Self, BoardError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardError::EmptyColumnTitle);
        }

        Ok(Self {
            id: ColumnId::generate(),
            title: normalized_title.to_owned(),
            task_ids: Vec::new(),
        })
    }

    /// Returns the three columns every fresh board starts with.
    #[must_use]
    pub fn default_set() -> Vec<Self> {
        SEEDED_COLUMNS
            .into_iter()
            .map(|(id, title)| Self {
                id: ColumnId::new(id),
                title: title.to_owned(),
                task_ids: Vec::new(),
            })
            .collect()
    }

    /// Returns `true` when the identifier belongs to a seeded default
    /// column.
    ///
    /// The store itself will delete a seeded column like any other; hiding
    /// the affordance for the three defaults is a presentation convention,
    /// and this predicate is where presentations look it up.
    #[must_use]
    pub fn is_default_id(id: &ColumnId) -> bool {
        SEEDED_COLUMNS
            .iter()
            .any(|(seeded_id, _)| *seeded_id == id.as_str())
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task references in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Consumes the column, yielding its task references.
    #[must_use]
    pub fn into_task_ids(self) -> Vec<TaskId> {
        self.task_ids
    }

    /// Returns `true` when the column references the task.
    #[must_use]
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }

    /// Returns the position of the task in this column, if present.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Appends a task reference at the end of the column.
    pub fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Inserts a task reference at the given position.
    ///
    /// Positions past the end are clamped to an append, so callers may pass
    /// a stale index without panicking.
    pub fn insert_task_at(&mut self, index: usize, task_id: TaskId) {
        let clamped = index.min(self.task_ids.len());
        self.task_ids.insert(clamped, task_id);
    }

    /// Removes a task reference, returning the position it occupied.
    ///
    /// Returns `None` when the column does not reference the task.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Option<usize> {
        let position = self.position_of(task_id)?;
        self.task_ids.remove(position);
        Some(position)
    }
}
