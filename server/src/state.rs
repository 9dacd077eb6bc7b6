use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use crime_hotspots_shared::AppRoute;

#[derive(Clone)]
pub struct AppState {
    /// Built client bundle (index.html, wasm, js, css).
    pub static_dir: Arc<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub observability: Arc<ObservabilityCounters>,
}

#[derive(Debug, Default)]
pub struct ObservabilityCounters {
    landing_requests_total: AtomicU64,
    visualization_requests_total: AtomicU64,
    health_requests_total: AtomicU64,
    not_found_total: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservabilitySnapshot {
    pub landing_requests_total: u64,
    pub visualization_requests_total: u64,
    pub health_requests_total: u64,
    pub not_found_total: u64,
}

impl ObservabilitySnapshot {
    pub fn page_requests(&self, route: AppRoute) -> u64 {
        match route {
            AppRoute::Landing => self.landing_requests_total,
            AppRoute::Visualization => self.visualization_requests_total,
        }
    }
}

impl ObservabilityCounters {
    pub fn snapshot(&self) -> ObservabilitySnapshot {
        ObservabilitySnapshot {
            landing_requests_total: self.landing_requests_total.load(Ordering::Relaxed),
            visualization_requests_total: self
                .visualization_requests_total
                .load(Ordering::Relaxed),
            health_requests_total: self.health_requests_total.load(Ordering::Relaxed),
            not_found_total: self.not_found_total.load(Ordering::Relaxed),
        }
    }

    pub fn record_page_request(&self, route: AppRoute) {
        let counter = match route {
            AppRoute::Landing => &self.landing_requests_total,
            AppRoute::Visualization => &self.visualization_requests_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_health_request(&self) {
        self.health_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found_total.fetch_add(1, Ordering::Relaxed);
    }
}

impl AppState {
    pub fn new(static_dir: impl AsRef<Path>) -> Self {
        Self {
            static_dir: Arc::new(static_dir.as_ref().to_path_buf()),
            started_at: Utc::now(),
            observability: Arc::new(ObservabilityCounters::default()),
        }
    }
}
