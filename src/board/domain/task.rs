//! Task aggregate and its creation/update parameter objects.

use super::{BoardError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Tasks are owned exclusively by the board store and referenced (never
/// owned) by exactly one column's task-id list at a time. The serialised
/// form is the snapshot wire contract, hence the camelCase field names.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::{Task, TaskDraft};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let task = Task::from_draft(TaskDraft::new("Buy milk"), &clock).expect("valid draft");
/// assert_eq!(task.title(), "Buy milk");
/// assert!(task.due_date().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    tags: Vec<String>,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a draft, with a fresh unique identifier and
    /// the creation timestamp taken from the clock.
    ///
    /// The title and description are stored trimmed of surrounding
    /// whitespace, the way task forms submit them.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskTitle`] when the draft title is empty
    /// or whitespace-only.
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Result<Self, BoardError> {
        let normalized_title = draft.title.trim();
        if normalized_title.is_empty() {
            return Err(BoardError::EmptyTaskTitle);
        }

        Ok(Self {
            id: TaskId::generate(),
            title: normalized_title.to_owned(),
            description: draft.description.trim().to_owned(),
            tags: draft.tags,
            due_date: draft.due_date,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tags in display order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges a patch into this task.
    ///
    /// Only the fields present in the patch change; the identifier, the
    /// creation timestamp, and column membership are never touched. A patch
    /// may blank the title: update deliberately performs no input
    /// validation, matching the board's observable editing behaviour.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}

/// Parameter object for creating a task.
///
/// Drafts carry unvalidated input; validation happens when the command is
/// applied, so a rejected draft never mutates board state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    tags: Vec<String>,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial update for an existing task.
///
/// An absent field leaves the corresponding task field untouched. The due
/// date distinguishes "leave alone" from "clear": use
/// [`TaskPatch::with_due_date`] to set one and [`TaskPatch::clear_due_date`]
/// to remove one.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::TaskPatch;
///
/// let patch = TaskPatch::default()
///     .with_title("Buy oat milk")
///     .clear_due_date();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Sets a new due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.due_date.is_none()
    }
}

/// Normalises comma-separated tag input into a tag list.
///
/// Splits on commas, trims each entry, and drops empties. This is the
/// normalisation task forms apply before handing tags to the store, so
/// stored tags never carry stray whitespace.
///
/// # Examples
///
/// ```
/// use corkboard::board::domain::parse_tag_list;
///
/// assert_eq!(parse_tag_list(" errand, home ,,"), vec!["errand", "home"]);
/// assert!(parse_tag_list("   ").is_empty());
/// ```
#[must_use]
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
