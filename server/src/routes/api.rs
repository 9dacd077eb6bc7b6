use std::fmt::Write as _;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use crime_hotspots_shared::{AppRoute, City};
use serde::Serialize;

use crate::state::{AppState, ObservabilitySnapshot};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub cities: Vec<City>,
    pub routes: Vec<&'static str>,
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    state.observability.record_health_request();
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        cities: City::ALL.to_vec(),
        routes: AppRoute::ALL.iter().map(|route| route.path()).collect(),
    })
}

/// `GET /api/metrics`
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus_metrics(state.observability.snapshot());

    (
        [
            (header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
}

fn render_prometheus_metrics(observability: ObservabilitySnapshot) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "# HELP crime_hotspots_page_requests_total App shell requests per client route."
    );
    let _ = writeln!(body, "# TYPE crime_hotspots_page_requests_total counter");
    for route in AppRoute::ALL {
        let _ = writeln!(
            body,
            "crime_hotspots_page_requests_total{{route=\"{}\"}} {}",
            route.path(),
            observability.page_requests(route)
        );
    }

    let _ = writeln!(
        body,
        "# HELP crime_hotspots_health_requests_total Total health endpoint requests."
    );
    let _ = writeln!(body, "# TYPE crime_hotspots_health_requests_total counter");
    let _ = writeln!(
        body,
        "crime_hotspots_health_requests_total {}",
        observability.health_requests_total
    );

    let _ = writeln!(
        body,
        "# HELP crime_hotspots_not_found_total Requests answered with 404."
    );
    let _ = writeln!(body, "# TYPE crime_hotspots_not_found_total counter");
    let _ = writeln!(
        body,
        "crime_hotspots_not_found_total {}",
        observability.not_found_total
    );

    body
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::render_prometheus_metrics;
    use crate::state::{AppState, ObservabilitySnapshot};

    #[test]
    fn metrics_output_contains_prometheus_help_type_and_values() {
        let metrics = render_prometheus_metrics(ObservabilitySnapshot {
            landing_requests_total: 12,
            visualization_requests_total: 7,
            health_requests_total: 3,
            not_found_total: 1,
        });

        assert!(metrics.contains("# HELP crime_hotspots_page_requests_total"));
        assert!(metrics.contains("# TYPE crime_hotspots_page_requests_total counter"));
        assert!(metrics.contains("crime_hotspots_page_requests_total{route=\"/\"} 12"));
        assert!(
            metrics.contains("crime_hotspots_page_requests_total{route=\"/visualization\"} 7")
        );
        assert!(metrics.contains("crime_hotspots_health_requests_total 3"));
        assert!(metrics.contains("crime_hotspots_not_found_total 1"));
    }

    #[tokio::test]
    async fn health_lists_cities_and_routes() {
        let state = AppState::new(std::env::temp_dir());
        let response = crate::app::build_app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("infallible router");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["cities"].as_array().map(Vec::len), Some(8));
        assert_eq!(json["cities"][0], "delhi");
        assert_eq!(
            json["routes"],
            serde_json::json!(["/", "/visualization"])
        );
        assert_eq!(state.observability.snapshot().health_requests_total, 1);
    }
}
