//! Tests for search and tag filtering.

use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::board::domain::{
    BoardStore, ColumnId, Task, TaskDraft, TaskId, matches_filters, matches_search, matches_tag,
};

type TestStore = BoardStore<DefaultClock>;

#[fixture]
fn task() -> Task {
    let draft = TaskDraft::new("Write Report")
        .with_description("Quarterly numbers")
        .with_tags(vec!["Work".to_owned(), "writing".to_owned()]);
    Task::from_draft(draft, &DefaultClock).expect("valid draft")
}

#[rstest]
#[case("", true)]
#[case("report", true)]
#[case("WRITE", true)]
#[case("quart", true)]
#[case("numbers", true)]
#[case("minutes", false)]
fn search_matches_title_or_description_case_insensitively(
    task: Task,
    #[case] term: &str,
    #[case] expected: bool,
) {
    assert_eq!(matches_search(&task, term), expected);
}

#[rstest]
fn search_does_not_look_at_tags(task: Task) {
    assert!(!matches_search(&task, "work"));
}

#[rstest]
#[case("", true)]
#[case("work", true)]
#[case("WORK", true)]
#[case("or", true)]
#[case("writing", true)]
#[case("errand", false)]
fn tag_filter_matches_any_tag_by_substring(task: Task, #[case] tag: &str, #[case] expected: bool) {
    assert_eq!(matches_tag(&task, tag), expected);
}

#[rstest]
fn tag_filter_does_not_look_at_title_or_description(task: Task) {
    assert!(!matches_tag(&task, "report"));
    assert!(!matches_tag(&task, "numbers"));
}

#[rstest]
#[case("report", "work", true)]
#[case("report", "errand", false)]
#[case("minutes", "work", false)]
#[case("", "", true)]
fn combined_filters_require_both_to_match(
    task: Task,
    #[case] term: &str,
    #[case] tag: &str,
    #[case] expected: bool,
) {
    assert_eq!(matches_filters(&task, term, tag), expected);
}

#[fixture]
fn store() -> TestStore {
    BoardStore::new(DefaultClock)
}

#[fixture]
fn todo() -> ColumnId {
    ColumnId::new("todo")
}

fn add_task(store: &mut TestStore, column_id: &ColumnId, title: &str, tags: &[&str]) -> TaskId {
    let draft = TaskDraft::new(title).with_tags(tags.iter().map(|tag| (*tag).to_owned()));
    store
        .add_task(column_id, draft)
        .expect("task creation should succeed")
}

fn task_ids(store: &TestStore, column_id: &ColumnId) -> Vec<TaskId> {
    store
        .state()
        .column(column_id)
        .expect("column should exist")
        .task_ids()
        .to_vec()
}

#[rstest]
fn empty_filters_pass_every_id_in_order(mut store: TestStore, todo: ColumnId) {
    let first = add_task(&mut store, &todo, "First", &[]);
    let second = add_task(&mut store, &todo, "Second", &[]);
    let ids = vec![first, second];

    assert_eq!(store.filtered_task_ids(&ids), ids);
}

#[rstest]
fn search_filter_narrows_the_visible_ids(mut store: TestStore, todo: ColumnId) {
    let milk = add_task(&mut store, &todo, "Buy milk", &[]);
    add_task(&mut store, &todo, "Walk dog", &[]);
    let ids = task_ids(&store, &todo);

    store.set_search_term("MILK");

    assert_eq!(store.filtered_task_ids(&ids), [milk]);
}

#[rstest]
fn tag_filter_narrows_the_visible_ids(mut store: TestStore, todo: ColumnId) {
    let chore = add_task(&mut store, &todo, "Buy milk", &["errand"]);
    add_task(&mut store, &todo, "Walk dog", &["pets"]);
    let ids = task_ids(&store, &todo);

    store.set_filter_tag("errand");

    assert_eq!(store.filtered_task_ids(&ids), [chore]);
}

#[rstest]
fn both_filters_apply_together(mut store: TestStore, todo: ColumnId) {
    let wanted = add_task(&mut store, &todo, "Buy milk", &["errand"]);
    add_task(&mut store, &todo, "Buy stamps", &["post"]);
    add_task(&mut store, &todo, "Walk dog", &["errand"]);
    let ids = task_ids(&store, &todo);

    store.set_search_term("buy");
    store.set_filter_tag("errand");

    assert_eq!(store.filtered_task_ids(&ids), [wanted]);
}

#[rstest]
fn unresolvable_ids_are_dropped(mut store: TestStore, todo: ColumnId) {
    let real = add_task(&mut store, &todo, "Real", &[]);
    let ghost = TaskId::new("task-ghost");

    assert_eq!(store.filtered_task_ids(&[ghost, real.clone()]), [real]);
}
