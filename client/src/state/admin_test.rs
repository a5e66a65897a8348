use super::*;
use market::models::{ApprovalStatus, Consultant, Taxonomy};

fn category(id: &str, name: &str) -> Taxonomy {
    Taxonomy { id: id.to_owned(), name: name.to_owned(), ..Taxonomy::default() }
}

fn pending(id: &str) -> Consultant {
    Consultant { id: id.to_owned(), status: ApprovalStatus::Pending, ..Consultant::default() }
}

#[test]
fn new_list_starts_loading() {
    let list = ResourceList::<Taxonomy>::default();
    assert!(list.loading);
    assert!(list.items.is_empty());
}

#[test]
fn delete_only_happens_after_confirmation() {
    let mut list = ResourceList::default();
    list.loaded(vec![category("c1", "Speech"), category("c2", "Motor")]);

    list.request_delete("c1");
    assert_eq!(list.items.len(), 2, "row stays while the dialog is open");

    let id = list.confirm_delete().expect("pending delete");
    assert!(list.removed(&id));
    assert_eq!(list.items.len(), 1);
    assert!(list.find("c1").is_none());
    assert_eq!(list.pending_delete, None);
}

#[test]
fn cancelled_delete_keeps_row() {
    let mut list = ResourceList::default();
    list.loaded(vec![category("c1", "Speech")]);
    list.request_delete("c1");
    list.cancel_delete();
    assert_eq!(list.confirm_delete(), None);
    assert_eq!(list.items.len(), 1);
}

#[test]
fn approved_consultant_leaves_pending_list_and_stays_gone_after_refetch() {
    let mut list = ResourceList::default();
    list.loaded(vec![pending("k1"), pending("k2")]);

    assert!(list.removed("k1"));
    list.request_reload();
    list.begin_load();
    // The backend no longer reports k1 as pending.
    list.loaded(vec![pending("k2")]);

    assert!(list.find("k1").is_none());
    assert_eq!(list.items.len(), 1);
}

#[test]
fn upsert_replaces_or_appends() {
    let mut list = ResourceList::default();
    list.loaded(vec![category("c1", "Speech")]);
    list.upserted(category("c1", "Speech Therapy"));
    list.upserted(category("c2", "Motor"));
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.find("c1").map(|c| c.name.as_str()), Some("Speech Therapy"));
}

#[test]
fn failure_stops_loading_and_keeps_message() {
    let mut list = ResourceList::<Taxonomy>::default();
    list.failed(&ApiError::Server { status: 500 });
    assert!(!list.loading);
    assert_eq!(list.error.as_deref(), Some("server error (500)"));
    list.begin_load();
    assert_eq!(list.error, None);
}

#[test]
fn reload_counter_wraps() {
    let mut list = ResourceList::<Taxonomy> { reload: u32::MAX, ..ResourceList::default() };
    list.request_reload();
    assert_eq!(list.reload, 0);
}

#[test]
fn editor_mode_titles() {
    assert_eq!(EditorMode::Create.title("Product"), "New Product");
    assert_eq!(EditorMode::Edit("p1".to_owned()).title("Product"), "Edit Product");
    assert!(!EditorMode::Closed.is_open());
}
