//! HTTP route registration for the user store.

use super::*;

pub(super) fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(users_router())
        .with_state(state)
}

fn users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(replace_user).delete(delete_user),
        )
}
