//! Date-only due checks.
//!
//! Due dates carry no time of day, so every comparison works on calendar
//! dates. Callers supply the reference day; the store derives it from the
//! local clock so that "due today" follows the user's timezone.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Relation of a due date to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueStatus {
    /// The task has no due date.
    Unscheduled,
    /// The due date lies after the reference day.
    Upcoming,
    /// The due date is the reference day.
    DueToday,
    /// The due date lies before the reference day.
    Overdue,
}

/// Classifies a due date against the given day.
#[must_use]
pub fn due_status(due_date: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    due_date.map_or(DueStatus::Unscheduled, |date| match date.cmp(&today) {
        Ordering::Less => DueStatus::Overdue,
        Ordering::Equal => DueStatus::DueToday,
        Ordering::Greater => DueStatus::Upcoming,
    })
}

/// Returns `true` when the due date falls strictly before the given day.
///
/// A task without a due date is never overdue.
#[must_use]
pub fn is_overdue(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|date| date < today)
}

/// Returns `true` when the due date is exactly the given day.
///
/// A task without a due date is never due today.
#[must_use]
pub fn is_due_today(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|date| date == today)
}
