pub mod chart_options;
pub mod city;
pub mod crime_series;
pub mod map_embed;
pub mod routes;
pub mod summary;
pub mod views;

pub use chart_options::{Axis, ChartOptions, LegendPosition, Panel};
pub use city::{City, UnknownCity, capitalize};
pub use crime_series::{ChartData, CitySeries, Dataset, Rgb};
pub use map_embed::{Coordinates, DEFAULT_MAP_EMBED_URL, coordinates, map_embed_url};
pub use routes::AppRoute;
pub use summary::{ANALYTICS_TILES, LANDING_TILES, SummaryTile, Tone};
pub use views::{AnalyticsState, LandingState, NO_CITY_PROMPT};
