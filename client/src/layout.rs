use crime_hotspots_shared::{City, SummaryTile};
use leptos::prelude::*;

/// Top bar with the page title on the left and page controls on the right.
#[component]
pub fn NavBar(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <nav class="bg-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <h1 class="text-2xl font-bold text-indigo-600">{title}</h1>
                    </div>
                    <div class="flex items-center space-x-4">{children()}</div>
                </div>
            </div>
        </nav>
    }
}

/// City dropdown. `prompt` adds a leading empty option meaning "no city".
#[component]
pub fn CitySelect(
    value: Signal<&'static str>,
    on_select: Callback<String>,
    #[prop(optional)] prompt: Option<&'static str>,
    #[prop(default = "w-full")] width_class: &'static str,
) -> impl IntoView {
    let option = move |slug: &'static str, text: String| {
        view! {
            <option value=slug selected=move || value.get() == slug>
                {text}
            </option>
        }
    };

    view! {
        <select
            class=format!(
                "{width_class} p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 bg-white shadow-sm",
            )
            prop:value=move || value.get().to_owned()
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            {prompt.map(|text| option("", text.to_owned()))}
            {City::ALL.into_iter().map(|city| option(city.slug(), city.label())).collect_view()}
        </select>
    }
}

/// Grid of literal headline figures.
#[component]
pub fn SummaryGrid(
    tiles: &'static [SummaryTile],
    grid_class: &'static str,
    title_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=grid_class>
            {tiles
                .iter()
                .map(|tile| {
                    view! {
                        <div class=format!("{} p-4 rounded-lg", tile.tone.background())>
                            <h3 class=format!("{title_class} font-semibold {}", tile.tone.text())>
                                {tile.title}
                            </h3>
                            <p class="text-2xl font-bold text-gray-800">{tile.value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// White card with a heading and a small accent dot.
#[component]
pub fn Card(heading: Signal<String>, accent: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-xl hover:shadow-2xl transition-shadow duration-300">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold text-gray-800">{move || heading.get()}</h2>
                <div class=format!("w-2 h-2 {accent} rounded-full")></div>
            </div>
            {children()}
        </div>
    }
}
