//! The whole-board state aggregate.

use super::{Column, ColumnId, Task, TaskId, Theme};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the board knows: columns in display order, the task map,
/// the live filters, and the theme.
///
/// The serialised form of this type is the snapshot wire contract, so the
/// field names below are frozen (camelCase, with `tasks` keyed by task
/// id). Deserialising produces an unchecked state; the store validates
/// structure before adopting one, so hold parsed states at arm's length
/// until [`BoardStore::load_snapshot`](super::BoardStore::load_snapshot)
/// has accepted them.
///
/// Mutators here are low-level primitives for the store: they keep the
/// column lists and task map consistent for well-formed inputs but do not
/// validate commands. Command validation belongs to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
    search_term: String,
    filter_tag: String,
    theme: Theme,
}

impl Default for BoardState {
    /// A fresh board: the three seeded columns, no tasks, no active
    /// filters, light theme.
    fn default() -> Self {
        Self {
            columns: Column::default_set(),
            tasks: BTreeMap::new(),
            search_term: String::new(),
            filter_tag: String::new(),
            theme: Theme::default(),
        }
    }
}

impl BoardState {
    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the task map, keyed by task id.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the live search term; empty means no search filter.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the live tag filter; empty means no tag filter.
    #[must_use]
    pub fn filter_tag(&self) -> &str {
        &self.filter_tag
    }

    /// Returns the active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns `true` when a column with this id exists.
    #[must_use]
    pub fn has_column(&self, column_id: &ColumnId) -> bool {
        self.column(column_id).is_some()
    }

    /// Returns `true` when a task with this id exists.
    #[must_use]
    pub fn has_task(&self, task_id: &TaskId) -> bool {
        self.tasks.contains_key(task_id)
    }

    /// Looks up a column for mutation.
    pub fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    /// Looks up a task for mutation.
    pub fn task_mut(&mut self, task_id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(task_id)
    }

    /// Appends a column at the end of the display order.
    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Removes a column, returning it so the caller can cascade over its
    /// task list.
    pub fn remove_column(&mut self, column_id: &ColumnId) -> Option<Column> {
        let position = self
            .columns
            .iter()
            .position(|column| column.id() == column_id)?;
        Some(self.columns.remove(position))
    }

    /// Adds a task to the map, keyed by its own id.
    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id().clone(), task);
    }

    /// Removes a task from the map, returning it if it was present.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Option<Task> {
        self.tasks.remove(task_id)
    }

    /// Removes the task reference from whichever column lists it.
    ///
    /// A task id appears in at most one column, so the scan stops at the
    /// first hit.
    pub fn strip_task_reference(&mut self, task_id: &TaskId) {
        for column in &mut self.columns {
            if column.remove_task(task_id).is_some() {
                return;
            }
        }
    }

    /// Moves a task reference out of the source column and into the
    /// destination at the clamped index, returning the position it left.
    ///
    /// Returns `None` without changing state when either column is missing
    /// or the source does not list the task. Source and destination may be
    /// the same column, in which case the insertion index is interpreted
    /// against the list after removal.
    pub fn relocate_task(
        &mut self,
        task_id: &TaskId,
        source_column_id: &ColumnId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Option<usize> {
        if !self.has_column(dest_column_id) {
            return None;
        }
        let source = self.column_mut(source_column_id)?;
        let source_position = source.remove_task(task_id)?;
        if let Some(dest) = self.column_mut(dest_column_id) {
            dest.insert_task_at(dest_index, task_id.clone());
        }
        Some(source_position)
    }

    /// Replaces the live search term.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Replaces the live tag filter.
    pub fn set_filter_tag(&mut self, tag: String) {
        self.filter_tag = tag;
    }

    /// Replaces the active theme.
    pub const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
