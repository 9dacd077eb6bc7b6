use serde::Serialize;

/// Client-side routes. The server serves the app shell for each of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRoute {
    Landing,
    Visualization,
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Landing, AppRoute::Visualization];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Visualization => "/visualization",
        }
    }

    /// Path without the leading slash; empty for the root.
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Landing => "Crime Hotspots",
            AppRoute::Visualization => "Crime Analytics Dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        AppRoute::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
    }
}
