//! Snapshot codec and structural validation.
//!
//! A snapshot is a [`BoardState`] in its persisted JSON form; the two are
//! the same shape by contract. This module renders states to JSON, parses
//! them back, and checks the structural rules a state must satisfy before
//! a store may adopt it: unique column ids, every listed task id resolving
//! to exactly one map entry, no unlisted tasks, and map keys matching the
//! tasks they hold.
//!
//! Parsing and validation are separate steps.
//! [`from_json`] only establishes the shape;
//! [`BoardStore::load_snapshot`](crate::board::domain::BoardStore::load_snapshot)
//! runs [`validate`] before committing, and rejects violating snapshots
//! wholesale.

use crate::board::domain::{BoardState, ColumnId, TaskId};
use std::collections::BTreeSet;
use thiserror::Error;

/// File name the persistence adapter keeps the live snapshot under.
pub const STORE_FILE_NAME: &str = "kanban-data.json";

/// File name offered to the user for a snapshot export.
pub const EXPORT_FILE_NAME: &str = "kanban-board-data.json";

/// Why a snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The payload was not valid JSON for the persisted board shape.
    #[error("malformed snapshot: {0}")]
    Parse(String),

    /// The state could not be rendered to JSON.
    #[error("could not encode snapshot: {0}")]
    Encode(String),

    /// A column id appears more than once.
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(ColumnId),

    /// A column lists a task id with no entry in the task map.
    #[error("column {column_id} references unknown task {task_id}")]
    UnknownTaskReference {
        /// Column whose list holds the dangling reference.
        column_id: ColumnId,
        /// The task id with no map entry.
        task_id: TaskId,
    },

    /// A task id is listed more than once, within or across columns.
    #[error("task {0} is referenced more than once")]
    DuplicateTaskReference(TaskId),

    /// A task map entry is not listed by any column.
    #[error("task {0} is not referenced by any column")]
    OrphanTask(TaskId),

    /// A task map entry is keyed by an id other than the task's own.
    #[error("task map key {key} does not match task id {id}")]
    TaskKeyMismatch {
        /// The key the entry sits under.
        key: TaskId,
        /// The id the task itself carries.
        id: TaskId,
    },

    /// Several violations were found; all of them are reported.
    #[error("multiple snapshot violations: {}", format_violations(.0))]
    Multiple(Vec<Self>),
}

fn format_violations(errors: &[SnapshotError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SnapshotError {
    /// Combines violations into a single error.
    ///
    /// A single violation is returned as itself; several become a
    /// [`SnapshotError::Multiple`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds when called with no violations, as that
    /// indicates a logic error in the caller. Release builds return an
    /// internal error variant instead.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty violations vector");
                Self::Parse("internal error: no snapshot violations".into())
            }
            1 => {
                // Length is verified to be 1 immediately above, so this will
                // always succeed.
                errors
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| Self::Parse("internal error: no snapshot violations".into()))
            }
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` when this error bundles several violations.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual violations if this is a
    /// [`SnapshotError::Multiple`].
    #[must_use]
    pub fn violations(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Parses a snapshot from its JSON wire form.
///
/// Parsing alone does not make a state safe to adopt; the structural
/// rules in [`validate`] run when a store loads it.
///
/// # Examples
///
/// ```
/// use corkboard::board::{domain::BoardState, snapshot};
///
/// let state = BoardState::default();
/// let json = snapshot::to_json(&state)?;
/// assert_eq!(snapshot::from_json(&json)?, state);
/// # Ok::<(), snapshot::SnapshotError>(())
/// ```
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] when the payload is not valid JSON for
/// the persisted board shape.
pub fn from_json(payload: &str) -> Result<BoardState, SnapshotError> {
    serde_json::from_str(payload).map_err(|err| SnapshotError::Parse(err.to_string()))
}

/// Renders a snapshot to compact JSON, the form the persistence adapter
/// stores.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialisation fails.
pub fn to_json(state: &BoardState) -> Result<String, SnapshotError> {
    serde_json::to_string(state).map_err(|err| SnapshotError::Encode(err.to_string()))
}

/// Renders a snapshot to indented JSON, the form offered for user
/// exports.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialisation fails.
pub fn to_json_pretty(state: &BoardState) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(state).map_err(|err| SnapshotError::Encode(err.to_string()))
}

/// Checks the structural rules a state must satisfy to be adopted.
///
/// All rules run and every violation is reported, rather than failing on
/// the first, so a corrupt snapshot can be diagnosed in one pass.
///
/// # Errors
///
/// Returns a single violation as itself and several as
/// [`SnapshotError::Multiple`].
pub fn validate(state: &BoardState) -> Result<(), SnapshotError> {
    let mut violations = Vec::new();

    if let Err(e) = validate_column_ids(state) {
        collect_violations(&mut violations, e);
    }
    if let Err(e) = validate_task_references(state) {
        collect_violations(&mut violations, e);
    }
    if let Err(e) = validate_task_keys(state) {
        collect_violations(&mut violations, e);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SnapshotError::multiple(violations))
    }
}

/// Column ids must be unique across the board.
fn validate_column_ids(state: &BoardState) -> Result<(), SnapshotError> {
    let mut seen = BTreeSet::new();
    let mut violations = Vec::new();

    for column in state.columns() {
        if !seen.insert(column.id()) {
            violations.push(SnapshotError::DuplicateColumnId(column.id().clone()));
        }
    }

    finish(violations)
}

/// Every listed task id must resolve to a map entry and be listed exactly
/// once; every map entry must be listed somewhere.
fn validate_task_references(state: &BoardState) -> Result<(), SnapshotError> {
    let mut referenced = BTreeSet::new();
    let mut violations = Vec::new();

    for column in state.columns() {
        for task_id in column.task_ids() {
            if !referenced.insert(task_id) {
                violations.push(SnapshotError::DuplicateTaskReference(task_id.clone()));
            }
            if !state.tasks().contains_key(task_id) {
                violations.push(SnapshotError::UnknownTaskReference {
                    column_id: column.id().clone(),
                    task_id: task_id.clone(),
                });
            }
        }
    }

    for task_id in state.tasks().keys() {
        if !referenced.contains(task_id) {
            violations.push(SnapshotError::OrphanTask(task_id.clone()));
        }
    }

    finish(violations)
}

/// Task map keys must match the id each task carries.
fn validate_task_keys(state: &BoardState) -> Result<(), SnapshotError> {
    let mut violations = Vec::new();

    for (key, task) in state.tasks() {
        if key != task.id() {
            violations.push(SnapshotError::TaskKeyMismatch {
                key: key.clone(),
                id: task.id().clone(),
            });
        }
    }

    finish(violations)
}

fn finish(violations: Vec<SnapshotError>) -> Result<(), SnapshotError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SnapshotError::multiple(violations))
    }
}

/// Collects violations, flattening `Multiple` variants.
fn collect_violations(violations: &mut Vec<SnapshotError>, error: SnapshotError) {
    match error {
        SnapshotError::Multiple(inner) => violations.extend(inner),
        other => violations.push(other),
    }
}
