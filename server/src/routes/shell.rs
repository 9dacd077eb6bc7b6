use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use crime_hotspots_shared::AppRoute;

use crate::config::{INDEX_FILE, SHELL_CACHE_CONTROL};
use crate::state::AppState;

/// Serve the client bundle's `index.html` for a client-side route.
pub async fn app_shell(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(route) = AppRoute::from_path(uri.path()) else {
        state.observability.record_not_found();
        return StatusCode::NOT_FOUND.into_response();
    };
    state.observability.record_page_request(route);

    let index_path = state.static_dir.join(INDEX_FILE);
    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => ([(header::CACHE_CONTROL, SHELL_CACHE_CONTROL)], Html(html)).into_response(),
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %index_path.display(),
                route = route.path(),
                "client bundle index is unavailable"
            );
            state.observability.record_not_found();
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
