use super::*;
use crate::admin::{NoticeKind, PAGE_SIZE, UserDialog};
use crate::test_support::{MemoryStore, numbered_users, user};

fn loaded(users: Vec<User>) -> UserTable<MemoryStore> {
    let mut t = UserTable::new(MemoryStore::with_users(users));
    t.load().expect("initial load");
    t
}

fn draft(name: &str) -> UserDraft {
    UserDraft {
        name: name.to_string(),
        ..UserDraft::default()
    }
}

#[test]
fn new_table_is_loading_and_shows_nothing() {
    let t = UserTable::new(MemoryStore::with_users(numbered_users(3)));
    assert_eq!(t.state(), &LoadState::Loading);
    assert!(t.visible().is_empty());
}

#[test]
fn load_replaces_collection_and_resets_page() {
    let mut t = loaded(numbered_users(25));
    assert!(t.go_to_page(3));

    t.load().expect("reload");
    assert_eq!(t.state(), &LoadState::Ready);
    assert_eq!(t.page(), 1);
    assert_eq!(t.collection().len(), 25);
    assert_eq!(t.filtered(), t.collection());
}

#[test]
fn load_failure_enters_error_state_and_retry_recovers() {
    let mut t = UserTable::new(MemoryStore::with_users(numbered_users(2)));
    t.store().fail_with("Failed to fetch users (HTTP 500)");

    let err = t.load().expect_err("load should fail");
    assert!(matches!(
        err,
        AdminError::Network {
            op: Operation::Fetch,
            ..
        }
    ));
    match t.state() {
        LoadState::Failed(msg) => assert!(msg.contains("HTTP 500")),
        other => panic!("expected failed state, got {:?}", other),
    }
    assert!(t.visible().is_empty());
    assert!(!t.has_notice());

    t.store().recover();
    t.load().expect("retry");
    assert_eq!(t.state(), &LoadState::Ready);
    assert_eq!(t.visible().len(), 2);
}

#[test]
fn single_record_filter_scenario() {
    let mut t = loaded(vec![user(1, "Ann", "A1", &["USA"])]);
    assert_eq!(t.apply_filter(UserFilter::new("an", "", "us")), 1);
    assert_eq!(t.filtered()[0].name, "Ann");
    assert_eq!(t.apply_filter(UserFilter::new("zz", "", "")), 0);
    assert!(t.visible().is_empty());
}

#[test]
fn reset_filter_restores_whole_collection() {
    let mut t = loaded(vec![
        user(1, "Ann", "A1", &["USA"]),
        user(2, "Bob", "", &["UK"]),
    ]);
    t.apply_filter(UserFilter::new("bob", "", ""));
    assert_eq!(t.filtered().len(), 1);

    t.reset_filter();
    assert!(t.filter().is_blank());
    assert_eq!(t.filtered(), t.collection());
}

#[test]
fn apply_filter_returns_to_first_page() {
    let mut t = loaded(numbered_users(30));
    assert!(t.go_to_page(3));
    t.apply_filter(UserFilter::new("user-1", "", ""));
    assert_eq!(t.page(), 1);
    assert_eq!(t.visible().len(), 10);
}

#[test]
fn pagination_slices_filtered_rows() {
    let mut t = loaded(numbered_users(23));
    assert_eq!(t.total_pages(), 3);
    assert_eq!(t.visible().len(), PAGE_SIZE);
    assert_eq!(t.visible()[0].name, "user-01");

    assert!(t.next_page());
    assert!(t.next_page());
    assert!(!t.next_page());
    assert_eq!(t.page(), 3);
    assert_eq!(t.visible().len(), 3);
    assert_eq!(t.visible()[2].name, "user-23");

    assert!(!t.go_to_page(4));
    assert!(!t.go_to_page(0));
    assert_eq!(t.page(), 3);

    assert!(t.prev_page());
    assert_eq!(t.page(), 2);
}

#[test]
fn create_appends_store_record_with_assigned_id() {
    let ann = user(1, "Ann", "A1", &["USA"]);
    let mut t = loaded(vec![ann.clone()]);

    let bob = t.create(draft("Bob")).expect("create");
    assert_eq!(bob.id, UserId::Num(2));
    assert_eq!(
        t.collection(),
        [ann, user(2, "Bob", "", &[])].as_slice()
    );
    let n = t.take_notice().expect("notice");
    assert_eq!(n.kind, NoticeKind::Success);
}

#[test]
fn create_failure_leaves_collection_untouched() {
    let mut t = loaded(numbered_users(2));
    let before = t.collection().to_vec();
    t.store().fail_with("disk full");

    let err = t.create(draft("Bob")).expect_err("create should fail");
    assert_eq!(err.to_string(), "Failed to save user: disk full");
    assert_eq!(t.collection(), before.as_slice());

    let n = t.take_notice().expect("notice");
    assert!(n.is_error());
    assert_eq!(n.message, "Failed to save user: disk full");
}

#[test]
fn delete_removes_record_after_ack() {
    let mut t = loaded(numbered_users(3));
    t.delete(&UserId::Num(2)).expect("delete");
    let ids: Vec<UserId> = t.collection().iter().map(|u| u.id.clone()).collect();
    assert_eq!(ids, vec![UserId::Num(1), UserId::Num(3)]);
    assert_eq!(
        t.take_notice().map(|n| n.message),
        Some("User deleted successfully!".to_string())
    );
}

#[test]
fn delete_failure_leaves_collection_untouched() {
    let mut t = loaded(numbered_users(3));
    let before = t.collection().to_vec();
    t.store().fail_with("not found");

    assert!(t.delete(&UserId::Num(2)).is_err());
    assert_eq!(t.collection(), before.as_slice());
    assert_eq!(
        t.take_notice().map(|n| n.message),
        Some("Failed to delete user: not found".to_string())
    );
}

#[test]
fn update_writes_locally_even_when_store_fails() {
    let mut t = loaded(vec![user(1, "Ann", "A1", &["USA"])]);
    t.store().fail_with("timeout");

    let err = t
        .update(
            &UserId::Num(1),
            UserDraft {
                name: "Annie".to_string(),
                code: "A2".to_string(),
                countries: vec![],
            },
        )
        .expect_err("update should fail");
    assert!(matches!(
        err,
        AdminError::Network {
            op: Operation::Update,
            ..
        }
    ));

    // Local copy changed, store did not.
    assert_eq!(t.collection()[0].name, "Annie");
    assert_eq!(t.store().users()[0].name, "Ann");

    let n = t.take_notice().expect("notice");
    assert!(n.is_error());
    assert!(n.message.starts_with("Failed to update user: timeout"));
    assert!(n.message.ends_with("Changes were made locally but not saved to server."));
}

#[test]
fn update_success_keeps_id_and_syncs_store() {
    let mut t = loaded(vec![user(1, "Ann", "A1", &["USA"])]);
    let saved = t
        .update(&UserId::Num(1), draft("Annie"))
        .expect("update");
    assert_eq!(saved.id, UserId::Num(1));
    assert_eq!(t.collection()[0].name, "Annie");
    assert_eq!(t.store().users()[0].name, "Annie");
    assert_eq!(t.store().calls(), vec!["list", "update"]);
}

#[test]
fn update_sends_fields_the_form_does_not_edit() {
    let mut ann = user(1, "Ann", "A1", &["USA"]);
    ann.extra
        .insert("email".to_string(), serde_json::Value::from("ann@x"));
    let mut t = loaded(vec![ann]);

    t.update(&UserId::Num(1), draft("Annie")).expect("update");

    let stored = &t.store().users()[0];
    assert_eq!(stored.name, "Annie");
    assert_eq!(stored.extra["email"], "ann@x");
    assert_eq!(t.collection()[0].extra["email"], "ann@x");
}

#[test]
fn collection_changes_drop_back_to_unfiltered_first_page() {
    let mut t = loaded(numbered_users(25));
    t.apply_filter(UserFilter::new("user-2", "", ""));
    assert!(t.filtered().len() < 25);

    t.create(draft("New")).expect("create");
    assert_eq!(t.filtered().len(), 26);
    assert_eq!(t.page(), 1);
}

#[test]
fn blank_dialog_submit_never_reaches_store() {
    let mut t = loaded(numbered_users(1));
    let mut d = UserDialog::default();
    d.open_add();
    d.set_name("  ");

    assert!(d.submit().is_err());
    assert_eq!(t.store().calls(), vec!["list"]);

    d.set_name("Dee");
    let sub = d.submit().expect("submit");
    t.dispatch(sub).expect("dispatch");
    assert_eq!(t.store().calls(), vec!["list", "create"]);
}
