//! Matching rules for the board's live search and tag filters.
//!
//! Matching is case-insensitive substring containment, not tokenised or
//! exact match. An empty term or tag disables the corresponding filter.

use super::Task;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `true` when the task matches the search term.
///
/// The term is matched against the title or the description; tags are not
/// searched, they have their own filter.
#[must_use]
pub fn matches_search(task: &Task, search_term: &str) -> bool {
    search_term.is_empty()
        || contains_ignore_case(task.title(), search_term)
        || contains_ignore_case(task.description(), search_term)
}

/// Returns `true` when any one of the task's tags matches the filter.
#[must_use]
pub fn matches_tag(task: &Task, filter_tag: &str) -> bool {
    filter_tag.is_empty()
        || task
            .tags()
            .iter()
            .any(|tag| contains_ignore_case(tag, filter_tag))
}

/// Returns `true` when the task passes both active filters.
#[must_use]
pub fn matches_filters(task: &Task, search_term: &str, filter_tag: &str) -> bool {
    matches_search(task, search_term) && matches_tag(task, filter_tag)
}
