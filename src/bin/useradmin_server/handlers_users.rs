//! `/users` handlers with json-server semantics: no validation beyond
//! "body is an object", ids assigned by the store, PUT replaces the record.

use super::*;

type HandlerResult<T> = std::result::Result<T, Response>;

pub(super) async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    let db = state.db.read().await;
    Json(db.users.clone())
}

pub(super) async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> HandlerResult<Json<Record>> {
    let db = state.db.read().await;
    let idx = find_index(&db.users, &id).ok_or_else(not_found)?;
    Ok(Json(db.users[idx].clone()))
}

pub(super) async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> HandlerResult<(StatusCode, Json<Record>)> {
    let Value::Object(mut record) = body else {
        return Err(bad_request("expected a JSON object"));
    };

    let mut db = state.db.write().await;
    let requested = record.get("id").filter(|v| !v.is_null()).cloned();
    match requested {
        Some(id) => {
            let text = id_text(&id).ok_or_else(|| bad_request("id must be a number or string"))?;
            if find_index(&db.users, &text).is_some() {
                return Err(conflict("duplicate id"));
            }
        }
        None => {
            let id = next_numeric_id(&db.users);
            record.insert("id".to_string(), Value::from(id));
        }
    }

    let mut next = db.clone();
    next.users.push(record.clone());
    commit(&state, &mut db, next)?;
    tracing::info!(id = ?record.get("id"), "user created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Full replace. The stored id wins over whatever the body carries.
pub(super) async fn replace_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> HandlerResult<Json<Record>> {
    let Value::Object(mut record) = body else {
        return Err(bad_request("expected a JSON object"));
    };

    let mut db = state.db.write().await;
    let idx = find_index(&db.users, &id).ok_or_else(not_found)?;
    let stored_id = db.users[idx].get("id").cloned().unwrap_or(Value::Null);
    record.insert("id".to_string(), stored_id);

    let mut next = db.clone();
    next.users[idx] = record.clone();
    commit(&state, &mut db, next)?;
    tracing::info!(%id, "user replaced");

    Ok(Json(record))
}

pub(super) async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> HandlerResult<Json<Value>> {
    let mut db = state.db.write().await;
    let idx = find_index(&db.users, &id).ok_or_else(not_found)?;

    let mut next = db.clone();
    next.users.remove(idx);
    commit(&state, &mut db, next)?;
    tracing::info!(%id, "user deleted");

    Ok(Json(serde_json::json!({})))
}

/// Writes `next` to disk and only then makes it the served state, so a
/// failed write leaves both the file and memory at the previous version.
fn commit(state: &AppState, db: &mut Db, next: Db) -> HandlerResult<()> {
    persist_db(&state.db_path, &next).map_err(internal_error)?;
    *db = next;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/bin/useradmin_server/handlers_tests.rs"]
mod tests;
