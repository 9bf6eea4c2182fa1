//! End-to-end flow: fetch, search, sort, select, back.

use directory_view::{
    compose, BaseCollection, FetchError, ListStatus, Record, SearchTermTracker, Selection,
    SelectionController, SortDirection, SortKey, SortSpec, SortSpecTracker,
};

const USERS: &str = r#"[
    { "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz" },
    { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv" }
]"#;

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn test_search_then_sort_scenario() {
    let records: Vec<Record> = serde_json::from_str(USERS).unwrap();
    let mut base = BaseCollection::new();
    base.apply_fetch(Ok(records));

    let mut search = SearchTermTracker::new();
    let mut sort = SortSpecTracker::new();

    let shown = compose(base.records(), search.term(), sort.current());
    assert_eq!(names(&shown), vec!["Ervin Howell", "Leanne Graham"]);

    search.set_term("howell");
    let shown = compose(base.records(), search.term(), sort.current());
    assert_eq!(names(&shown), vec!["Ervin Howell"]);

    let spec = sort.request_sort(SortKey::Email);
    assert_eq!(spec, SortSpec::new(SortKey::Email, SortDirection::Ascending));

    search.set_term("");
    let shown = compose(base.records(), search.term(), sort.current());
    // "Shanna@..." < "Sincere@..."
    assert_eq!(names(&shown), vec!["Ervin Howell", "Leanne Graham"]);

    sort.request_sort(SortKey::Email);
    let shown = compose(base.records(), search.term(), sort.current());
    assert_eq!(names(&shown), vec!["Leanne Graham", "Ervin Howell"]);
}

#[test]
fn test_selection_round_trip_keeps_displayed_list() {
    let records: Vec<Record> = serde_json::from_str(USERS).unwrap();
    let mut base = BaseCollection::new();
    base.apply_fetch(Ok(records));

    let mut search = SearchTermTracker::new();
    search.set_term("e");
    let sort = SortSpecTracker::new();
    let before: Vec<Record> = compose(base.records(), search.term(), sort.current())
        .into_iter()
        .cloned()
        .collect();

    let mut selection = SelectionController::new();
    let picked = before[0].clone();
    assert!(base.contains(&picked));
    selection.select(picked.clone());
    assert_eq!(selection.current(), &Selection::DetailView(picked));

    selection.back();
    assert_eq!(selection.current(), &Selection::ListView);

    let after: Vec<Record> = compose(base.records(), search.term(), sort.current())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_list_status_after_fetch() {
    let mut base = BaseCollection::new();
    assert_eq!(ListStatus::from_parts(base.state(), 0), ListStatus::Loading);

    base.apply_fetch(Err(FetchError::Transport("offline".into())));
    assert_eq!(
        ListStatus::from_parts(base.state(), 0),
        ListStatus::Failed("Failed to fetch users: offline".into())
    );

    let mut base = BaseCollection::new();
    base.apply_fetch(Ok(serde_json::from_str(USERS).unwrap()));
    let shown = compose(base.records(), "zzz", SortSpec::default());
    assert_eq!(ListStatus::from_parts(base.state(), shown.len()), ListStatus::Empty);
}
