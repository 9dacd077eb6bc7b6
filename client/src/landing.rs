use crime_hotspots_shared::{AppRoute, LandingState, NO_CITY_PROMPT};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::{CitySelect, NavBar, SummaryGrid};

/// Landing page: city picker over an embedded map.
#[component]
pub fn LandingView() -> impl IntoView {
    // Lives and dies with this view; the analytics page keeps its own.
    let state: RwSignal<LandingState> = RwSignal::new(LandingState::default());
    let map_url = Memo::new(move |_| state.with(LandingState::map_embed_url));
    let selector_value = Signal::derive(move || state.with(LandingState::selector_value));
    let on_select = Callback::new(move |value: String| state.update(|s| s.select(&value)));

    let navigate = use_navigate();
    let view_analytics = move |_| {
        let target = state.with_untracked(LandingState::analytics_route);
        navigate(target.path(), Default::default());
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <NavBar title=AppRoute::Landing.title()>
                <button
                    on:click=view_analytics
                    class="bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-2 rounded-lg shadow-md transition duration-300 ease-in-out transform hover:scale-105"
                >
                    "View Analytics"
                </button>
            </NavBar>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="bg-white rounded-xl shadow-2xl overflow-hidden">
                    <div class="p-6">
                        <div class="flex flex-col md:flex-row items-center justify-between mb-6">
                            <h2 class="text-2xl font-semibold text-gray-800 mb-4 md:mb-0">
                                "Crime Map Analysis"
                            </h2>
                            <div class="w-full md:w-64">
                                <CitySelect
                                    value=selector_value
                                    on_select=on_select
                                    prompt=NO_CITY_PROMPT
                                />
                            </div>
                        </div>

                        <div class="flex justify-center">
                            <iframe
                                src=move || map_url.get()
                                width="100%"
                                height="450"
                                style="border: 0; width: 75%;"
                                allowfullscreen=false
                                referrerpolicy="no-referrer-when-downgrade"
                                class="rounded-lg shadow-lg"
                            ></iframe>
                        </div>

                        <SummaryGrid
                            tiles=state.with_untracked(LandingState::tiles)
                            grid_class="mt-8 grid grid-cols-1 md:grid-cols-3 gap-4"
                            title_class="text-lg"
                        />
                    </div>
                </div>
            </main>
        </div>
    }
}
