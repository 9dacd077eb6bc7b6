//! Per-view state and the values each view derives from it.
//!
//! The landing and analytics pages keep separate state; nothing here is
//! shared between them.

use crate::chart_options::Panel;
use crate::city::City;
use crate::crime_series::{ChartData, CitySeries};
use crate::map_embed::map_embed_url;
use crate::routes::AppRoute;
use crate::summary::{ANALYTICS_TILES, LANDING_TILES, SummaryTile};

/// Option text shown for the empty selection on the landing page.
pub const NO_CITY_PROMPT: &str = "Select a City";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandingState {
    pub selected_city: Option<City>,
}

impl LandingState {
    pub fn select(&mut self, value: &str) {
        self.selected_city = City::from_selector(value);
    }

    pub fn selector_value(&self) -> &'static str {
        self.selected_city.map(City::slug).unwrap_or("")
    }

    pub fn map_embed_url(&self) -> String {
        map_embed_url(self.selected_city)
    }

    pub fn tiles(&self) -> &'static [SummaryTile] {
        &LANDING_TILES
    }

    /// Target of the "View Analytics" button. The selection is not carried over.
    pub fn analytics_route(&self) -> AppRoute {
        AppRoute::Visualization
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticsState {
    pub selected_city: City,
}

impl AnalyticsState {
    /// Unknown values select the default city.
    pub fn select(&mut self, value: &str) {
        self.selected_city = value.parse().unwrap_or_default();
    }

    pub fn selector_value(&self) -> &'static str {
        self.selected_city.slug()
    }

    /// False when the selected city is shown with fallback figures.
    pub fn has_own_data(&self) -> bool {
        CitySeries::has_entry(self.selected_city)
    }

    pub fn current_data(&self) -> &'static CitySeries {
        CitySeries::lookup(self.selected_city)
    }

    pub fn chart(&self, panel: Panel) -> &'static ChartData {
        panel.data(self.current_data())
    }

    pub fn heading(&self, panel: Panel) -> String {
        panel.heading(self.selected_city)
    }

    pub fn tiles(&self) -> &'static [SummaryTile] {
        &ANALYTICS_TILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_embed::{DEFAULT_MAP_EMBED_URL, coordinates};

    #[test]
    fn landing_starts_unselected_on_country_view() {
        let state = LandingState::default();
        assert_eq!(state.selected_city, None);
        assert_eq!(state.selector_value(), "");
        assert_eq!(state.map_embed_url(), DEFAULT_MAP_EMBED_URL);
    }

    #[test]
    fn landing_selection_drives_map_url() {
        for city in City::ALL {
            let mut state = LandingState::default();
            state.select(city.slug());
            let coords = coordinates(city);
            let url = state.map_embed_url();
            assert_eq!(state.selector_value(), city.slug());
            assert!(url.contains(&coords.longitude.to_string()));
            assert!(url.contains(&coords.latitude.to_string()));
            assert!(url.contains(&format!("zoom={}", coords.zoom)));
            assert!(url.contains(&city.label()));
        }
    }

    #[test]
    fn landing_clearing_selection_restores_default_url() {
        let mut state = LandingState::default();
        state.select("chennai");
        state.select("");
        assert_eq!(state.map_embed_url(), DEFAULT_MAP_EMBED_URL);
    }

    #[test]
    fn analytics_defaults_to_delhi() {
        let state = AnalyticsState::default();
        assert_eq!(state.selected_city, City::Delhi);
        assert!(state.has_own_data());
        assert_eq!(state.heading(Panel::Overall), "Delhi Crime Trends");
    }

    #[test]
    fn analytics_mumbai_overall_series() {
        let mut state = AnalyticsState::default();
        state.select("mumbai");
        assert_eq!(
            state.current_data().overall.datasets[0].data,
            &[55, 49, 70, 71, 46]
        );
    }

    #[test]
    fn analytics_missing_city_matches_delhi() {
        let mut bangalore = AnalyticsState::default();
        bangalore.select("bangalore");
        let mut delhi = AnalyticsState::default();
        delhi.select("delhi");

        assert!(!bangalore.has_own_data());
        for panel in Panel::ALL {
            assert_eq!(bangalore.chart(panel), delhi.chart(panel));
        }
        assert_eq!(bangalore.heading(Panel::Overall), "Bangalore Crime Trends");
    }

    #[test]
    fn analytics_unknown_value_selects_default() {
        let mut state = AnalyticsState::default();
        state.select("mumbai");
        state.select("gotham");
        assert_eq!(state.selected_city, City::Delhi);
    }

    #[test]
    fn tiles_ignore_selection() {
        let mut landing = LandingState::default();
        let mut analytics = AnalyticsState::default();
        let landing_before = landing.tiles();
        let analytics_before = analytics.tiles();
        for city in City::ALL {
            landing.select(city.slug());
            analytics.select(city.slug());
            assert_eq!(landing.tiles(), landing_before);
            assert_eq!(analytics.tiles(), analytics_before);
        }
        let values: Vec<&str> = analytics.tiles().iter().map(|tile| tile.value).collect();
        assert_eq!(values, ["1,234", "892", "342", "72%"]);
    }

    #[test]
    fn reselecting_same_city_is_idempotent() {
        let mut landing = LandingState::default();
        landing.select("kolkata");
        let first = (landing, landing.map_embed_url());
        landing.select("kolkata");
        assert_eq!((landing, landing.map_embed_url()), first);

        let mut analytics = AnalyticsState::default();
        analytics.select("mumbai");
        let first = (analytics, analytics.heading(Panel::Overall), analytics.current_data());
        analytics.select("mumbai");
        assert_eq!(
            (analytics, analytics.heading(Panel::Overall), analytics.current_data()),
            first
        );
    }

    #[test]
    fn view_analytics_targets_visualization_and_keeps_landing_selection() {
        let mut landing = LandingState::default();
        landing.select("pune");
        let before = landing;

        let target = landing.analytics_route();
        assert_eq!(AppRoute::from_path(target.path()), Some(AppRoute::Visualization));
        assert_eq!(target.path(), "/visualization");
        assert_eq!(landing, before);

        // The analytics page starts from its own default, not the landing pick.
        let analytics = AnalyticsState::default();
        assert_eq!(analytics.selected_city, City::Delhi);
        assert_eq!(landing.selected_city, Some(City::Pune));
    }
}
