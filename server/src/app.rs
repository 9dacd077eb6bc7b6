use std::path::Path;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use crime_hotspots_shared::AppRoute;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HASHED_ASSET_CACHE_CONTROL;
use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState) -> Router {
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(state.static_dir.as_path())
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(set_static_cache_control))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            record_static_not_found,
        ));

    let mut app = Router::new()
        .route("/api/health", get(routes::api::health))
        .route("/api/metrics", get(routes::api::metrics));

    // Every client route gets the app shell so deep links and reloads work.
    for route in AppRoute::ALL {
        app = app.route(route.path(), get(routes::shell::app_shell));
        if route != AppRoute::Landing {
            app = app.route(&format!("{}/", route.path()), get(routes::shell::app_shell));
        }
    }

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

async fn record_static_not_found(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::NOT_FOUND {
        state.observability.record_not_found();
    }
    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if is_hashed_bundle_asset(path) {
        return Some(HASHED_ASSET_CACHE_CONTROL);
    }

    None
}

fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}
