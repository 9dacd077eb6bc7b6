use crime_hotspots_shared::{AnalyticsState, AppRoute, City, Panel};
use leptos::prelude::*;

use crate::chart::LineChart;
use crate::layout::{Card, CitySelect, NavBar, SummaryGrid};

/// Analytics page: three trend charts and a summary grid for one city.
#[component]
pub fn AnalyticsView() -> impl IntoView {
    let state: RwSignal<AnalyticsState> = RwSignal::new(AnalyticsState::default());
    let selector_value = Signal::derive(move || state.with(AnalyticsState::selector_value));
    let on_select = Callback::new(move |value: String| state.update(|s| s.select(&value)));

    Effect::new(move || {
        let current = state.get();
        if !current.has_own_data() {
            web_sys::console::info_1(
                &format!(
                    "no crime series for {}, showing {}",
                    current.selected_city,
                    City::default()
                )
                .into(),
            );
        }
    });

    let chart_cards = Panel::ALL
        .into_iter()
        .map(|panel| {
            let heading = Signal::derive(move || state.with(|s| s.heading(panel)));
            let data = Signal::derive(move || state.with(|s| s.chart(panel)));
            let options = panel.options();
            view! {
                <Card heading=heading accent=panel.accent()>
                    <LineChart data=data options=options />
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <NavBar title=AppRoute::Visualization.title()>
                <CitySelect value=selector_value on_select=on_select width_class="w-64" />
            </NavBar>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {chart_cards}
                    <Card
                        heading=Signal::derive(|| "Summary Statistics".to_owned())
                        accent="bg-purple-600"
                    >
                        <SummaryGrid
                            tiles=state.with_untracked(AnalyticsState::tiles)
                            grid_class="grid grid-cols-2 gap-4"
                            title_class="text-sm"
                        />
                    </Card>
                </div>
            </main>
        </div>
    }
}
