//! The board store: authoritative state plus the command API.

use super::{
    Applied, BoardError, BoardResult, BoardState, Column, ColumnId, Command, DueStatus, MoveTask,
    Task, TaskDraft, TaskId, TaskPatch, Theme, due, filter,
};
use crate::board::snapshot;
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::BTreeSet;

/// Single authoritative owner of a board.
///
/// All mutation flows through the named command methods or the generic
/// [`BoardStore::apply`] dispatcher. Every command validates before it
/// mutates, so an error return guarantees the state is exactly what it was
/// before the call. Reads hand out references or snapshot clones, never
/// mutable access.
///
/// The clock is injected so due checks and creation timestamps are
/// deterministic under test; production callers use
/// [`mockable::DefaultClock`].
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::{BoardStore, ColumnId, TaskDraft};
/// use mockable::DefaultClock;
///
/// let mut store = BoardStore::new(DefaultClock);
/// let todo = ColumnId::new("todo");
/// let task_id = store.add_task(&todo, TaskDraft::new("Buy milk"))?;
/// assert!(store.state().tasks().contains_key(&task_id));
/// # Ok::<(), corkboard::board::domain::BoardError>(())
/// ```
#[derive(Debug)]
pub struct BoardStore<C> {
    state: BoardState,
    clock: C,
}

impl<C: Clock> BoardStore<C> {
    /// Creates a store holding a fresh default board.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: BoardState::default(),
            clock,
        }
    }

    /// Returns a read-only view of the live state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Applies a command, returning what it produced.
    ///
    /// The match is exhaustive over the closed command set, so extending
    /// [`Command`] without handling the new variant fails to compile.
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched command; the state is
    /// unchanged whenever an error comes back.
    pub fn apply(&mut self, command: Command) -> BoardResult<Applied> {
        match command {
            Command::AddTask { column_id, draft } => {
                self.add_task(&column_id, draft).map(Applied::TaskCreated)
            }
            Command::UpdateTask { task_id, patch } => {
                self.update_task(&task_id, patch).map(|()| Applied::Done)
            }
            Command::DeleteTask { task_id } => {
                self.delete_task(&task_id);
                Ok(Applied::Done)
            }
            Command::MoveTask(request) => self.move_task(request).map(|()| Applied::Done),
            Command::AddColumn { title } => self.add_column(title).map(Applied::ColumnCreated),
            Command::DeleteColumn { column_id } => {
                self.delete_column(&column_id).map(Applied::ColumnDeleted)
            }
            Command::SetSearchTerm { term } => {
                self.set_search_term(term);
                Ok(Applied::Done)
            }
            Command::SetFilterTag { tag } => {
                self.set_filter_tag(tag);
                Ok(Applied::Done)
            }
            Command::ToggleTheme => Ok(Applied::ThemeToggled(self.toggle_theme())),
            Command::LoadSnapshot { snapshot } => {
                self.load_snapshot(snapshot).map(|()| Applied::Done)
            }
        }
    }

    /// Creates a task from the draft and appends it to the column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTaskColumn`] when the column does not
    /// exist and [`BoardError::EmptyTaskTitle`] when the draft title is
    /// empty or whitespace-only. Neither failure mutates state.
    pub fn add_task(&mut self, column_id: &ColumnId, draft: TaskDraft) -> BoardResult<TaskId> {
        let Some(column) = self.state.column_mut(column_id) else {
            return Err(BoardError::UnknownTaskColumn(column_id.clone()));
        };
        let task = Task::from_draft(draft, &self.clock)?;
        let task_id = task.id().clone();
        column.push_task(task_id.clone());
        self.state.insert_task(task);
        Ok(task_id)
    }

    /// Merges the patch into an existing task.
    ///
    /// Column membership and ordering are untouched, whatever the patch
    /// contains.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task does not exist;
    /// silently ignoring a dangling reference here would hide a caller
    /// bug.
    pub fn update_task(&mut self, task_id: &TaskId, patch: TaskPatch) -> BoardResult<()> {
        let Some(task) = self.state.task_mut(task_id) else {
            return Err(BoardError::TaskNotFound(task_id.clone()));
        };
        task.apply_patch(patch);
        Ok(())
    }

    /// Removes a task from the map and strips its reference from whichever
    /// column lists it.
    ///
    /// Deleting a task that is already gone is a no-op, not an error; the
    /// return reports whether anything was removed.
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        if self.state.remove_task(task_id).is_some() {
            self.state.strip_task_reference(task_id);
            true
        } else {
            false
        }
    }

    /// Relocates a task within or across columns.
    ///
    /// A move to the identical column and index is a no-op. Otherwise the
    /// task is located by id in the source column, removed, and inserted
    /// into the destination at the clamped index; within one column the
    /// index is interpreted against the list after removal, matching
    /// drag-and-drop expectations.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when either column is
    /// missing, [`BoardError::TaskNotFound`] when the task does not exist,
    /// and [`BoardError::TaskNotInColumn`] when the source column does not
    /// list it. All failures leave the state unchanged.
    pub fn move_task(&mut self, request: MoveTask) -> BoardResult<()> {
        let MoveTask {
            task_id,
            source_column_id,
            dest_column_id,
            source_index,
            dest_index,
        } = request;

        // Dropping a card back where it was picked up is not a move.
        if source_column_id == dest_column_id && source_index == dest_index {
            return Ok(());
        }
        if !self.state.has_column(&source_column_id) {
            return Err(BoardError::ColumnNotFound(source_column_id));
        }
        if !self.state.has_column(&dest_column_id) {
            return Err(BoardError::ColumnNotFound(dest_column_id));
        }
        if !self.state.has_task(&task_id) {
            return Err(BoardError::TaskNotFound(task_id));
        }
        self.state
            .relocate_task(&task_id, &source_column_id, &dest_column_id, dest_index)
            .map(|_| ())
            .ok_or(BoardError::TaskNotInColumn {
                task_id,
                column_id: source_column_id,
            })
    }

    /// Creates an empty column at the end of the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`] when the title is empty or
    /// whitespace-only.
    pub fn add_column(&mut self, title: impl Into<String>) -> BoardResult<ColumnId> {
        let column = Column::from_title(title)?;
        let column_id = column.id().clone();
        self.state.push_column(column);
        Ok(column_id)
    }

    /// Removes a column and cascade-deletes every task it lists, returning
    /// the deleted task ids in column order.
    ///
    /// Tasks are not moved elsewhere; the caller owns any confirmation
    /// flow, and the returned ids let it report what was destroyed. Seeded
    /// default columns are deletable here like any other, their protection
    /// is a presentation convention (see [`Column::is_default_id`]).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when the column does not
    /// exist.
    pub fn delete_column(&mut self, column_id: &ColumnId) -> BoardResult<Vec<TaskId>> {
        let Some(column) = self.state.remove_column(column_id) else {
            return Err(BoardError::ColumnNotFound(column_id.clone()));
        };
        let task_ids = column.into_task_ids();
        for task_id in &task_ids {
            self.state.remove_task(task_id);
        }
        Ok(task_ids)
    }

    /// Replaces the live search term; an empty term disables the filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term.into());
    }

    /// Replaces the live tag filter; an empty tag disables the filter.
    pub fn set_filter_tag(&mut self, tag: impl Into<String>) {
        self.state.set_filter_tag(tag.into());
    }

    /// Flips between the light and dark themes, returning the new one.
    pub const fn toggle_theme(&mut self) -> Theme {
        let next = self.state.theme().toggled();
        self.state.set_theme(next);
        next
    }

    /// Replaces the whole state with the snapshot.
    ///
    /// The snapshot is structurally validated first: on any violation the
    /// incoming state is rejected wholesale and the prior state stays in
    /// place. There is no partial application.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSnapshot`] describing every violation
    /// found.
    pub fn load_snapshot(&mut self, snapshot: BoardState) -> BoardResult<()> {
        snapshot::validate(&snapshot)?;
        self.state = snapshot;
        Ok(())
    }

    /// Returns the full current state in the persisted form.
    ///
    /// The clone is detached: mutating it cannot affect the store.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.state.clone()
    }

    /// Returns the ids from `task_ids` whose task matches both live
    /// filters, preserving order.
    ///
    /// Ids that do not resolve to a task are dropped. With both filters
    /// empty, every resolvable id passes.
    #[must_use]
    pub fn filtered_task_ids(&self, task_ids: &[TaskId]) -> Vec<TaskId> {
        task_ids
            .iter()
            .filter(|task_id| {
                self.state.task(task_id).is_some_and(|task| {
                    filter::matches_filters(
                        task,
                        self.state.search_term(),
                        self.state.filter_tag(),
                    )
                })
            })
            .cloned()
            .collect()
    }

    /// Returns the distinct tags across all tasks, sorted.
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for task in self.state.tasks().values() {
            for tag in task.tags() {
                tags.insert(tag.as_str());
            }
        }
        tags.into_iter().map(str::to_owned).collect()
    }

    /// Returns `true` when the due date falls before today in local time.
    #[must_use]
    pub fn is_overdue(&self, due_date: Option<NaiveDate>) -> bool {
        due::is_overdue(due_date, self.today())
    }

    /// Returns `true` when the due date is today in local time.
    #[must_use]
    pub fn is_due_today(&self, due_date: Option<NaiveDate>) -> bool {
        due::is_due_today(due_date, self.today())
    }

    /// Classifies a due date against today in local time.
    #[must_use]
    pub fn due_status(&self, due_date: Option<NaiveDate>) -> DueStatus {
        due::due_status(due_date, self.today())
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}
