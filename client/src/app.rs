use crime_hotspots_shared::AppRoute;
use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::analytics::AnalyticsView;
use crate::landing::LandingView;

/// Root component. Each route mounts a view that owns its own state; nothing
/// is provided through context, so leaving a view discards its selection.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingView />
                <Route
                    path=StaticSegment(AppRoute::Visualization.segment())
                    view=AnalyticsView
                />
            </Routes>
        </Router>
    }
}
