use serde_json::json;
use tempfile::TempDir;

use super::*;

fn state_with(users: Value) -> (TempDir, Arc<AppState>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("db.json");
    std::fs::write(
        &db_path,
        serde_json::to_vec(&json!({ "users": users })).expect("serialize seed"),
    )
    .expect("write seed db");
    let db = load_or_init_db(&db_path).expect("load seed db");
    let state = Arc::new(AppState {
        db_path,
        db: Arc::new(RwLock::new(db)),
    });
    (dir, state)
}

fn ok<T>(res: HandlerResult<T>) -> T {
    match res {
        Ok(v) => v,
        Err(resp) => panic!("handler failed with status {}", resp.status()),
    }
}

fn err_status<T>(res: HandlerResult<T>) -> StatusCode {
    match res {
        Ok(_) => panic!("handler unexpectedly succeeded"),
        Err(resp) => resp.status(),
    }
}

fn on_disk(state: &AppState) -> Value {
    let bytes = std::fs::read(&state.db_path).expect("read db file");
    serde_json::from_slice(&bytes).expect("parse db file")
}

#[tokio::test]
async fn create_assigns_next_numeric_id_and_persists() {
    let (_dir, state) = state_with(json!([
        {"id": 1, "name": "Ann", "code": "A1", "countries": ["USA"]}
    ]));

    let (status, Json(rec)) = ok(create_user(
        State(state.clone()),
        Json(json!({"name": "Bob", "code": "", "countries": []})),
    )
    .await);

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rec.get("id"), Some(&json!(2)));
    assert_eq!(on_disk(&state)["users"][1]["name"], "Bob");
}

#[tokio::test]
async fn create_keeps_client_id_but_rejects_duplicates() {
    let (_dir, state) = state_with(json!([{"id": 1, "name": "Ann"}]));

    let (_, Json(rec)) = ok(create_user(
        State(state.clone()),
        Json(json!({"id": "abc", "name": "Cy"})),
    )
    .await);
    assert_eq!(rec.get("id"), Some(&json!("abc")));

    let status = err_status(
        create_user(State(state.clone()), Json(json!({"id": 1, "name": "Dup"}))).await,
    );
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_rejects_non_object_body() {
    let (_dir, state) = state_with(json!([]));
    let status = err_status(create_user(State(state), Json(json!(["nope"]))).await);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn replace_is_full_and_keeps_stored_id() {
    let (_dir, state) = state_with(json!([
        {"id": 1, "name": "Ann", "code": "A1", "countries": ["USA"]}
    ]));

    let Json(rec) = ok(replace_user(
        State(state.clone()),
        Path("1".to_string()),
        Json(json!({"id": 99, "name": "Annie"})),
    )
    .await);

    assert_eq!(rec.get("id"), Some(&json!(1)));
    assert_eq!(rec.get("code"), None);

    let Json(fetched) = ok(get_user(State(state.clone()), Path("1".to_string())).await);
    assert_eq!(fetched, rec);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let (_dir, state) = state_with(json!([{"id": 1, "name": "Ann"}]));

    assert_eq!(
        err_status(get_user(State(state.clone()), Path("2".to_string())).await),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        err_status(
            replace_user(
                State(state.clone()),
                Path("2".to_string()),
                Json(json!({"name": "x"}))
            )
            .await
        ),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        err_status(delete_user(State(state.clone()), Path("2".to_string())).await),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_removes_record_from_memory_and_disk() {
    let (_dir, state) = state_with(json!([
        {"id": 1, "name": "Ann"},
        {"id": 2, "name": "Bob"}
    ]));

    let Json(body) = ok(delete_user(State(state.clone()), Path("1".to_string())).await);
    assert_eq!(body, json!({}));

    let Json(users) = list_users(State(state.clone())).await;
    assert_eq!(users.len(), 1);
    assert_eq!(on_disk(&state)["users"], json!([{"id": 2, "name": "Bob"}]));
}

#[tokio::test]
async fn failed_write_leaves_served_state_unchanged() {
    let (dir, seeded) = state_with(json!([{"id": 1, "name": "Ann"}]));

    // A non-empty directory at the db path makes the final rename fail.
    let blocked = dir.path().join("blocked");
    std::fs::create_dir_all(blocked.join("keep")).expect("create blocking dir");
    let db = seeded.db.read().await.clone();
    let state = Arc::new(AppState {
        db_path: blocked,
        db: Arc::new(RwLock::new(db)),
    });

    let status = err_status(
        create_user(State(state.clone()), Json(json!({"name": "Bob"}))).await,
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let status = err_status(
        replace_user(
            State(state.clone()),
            Path("1".to_string()),
            Json(json!({"name": "Annie"})),
        )
        .await,
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let status = err_status(delete_user(State(state.clone()), Path("1".to_string())).await);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let Json(users) = list_users(State(state)).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Ann");
}
