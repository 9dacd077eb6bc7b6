use serde::Serialize;

use crate::city::City;
use crate::crime_series::{ChartData, CitySeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Self {
            begin_at_zero: false,
            max: None,
            title: Some(title.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend_position: LegendPosition,
    pub title: Option<String>,
    pub y: Axis,
    pub x: Option<Axis>,
}

impl ChartOptions {
    /// Shared configuration every panel starts from.
    pub fn base() -> Self {
        Self {
            responsive: true,
            legend_position: LegendPosition::Top,
            title: Some("Crime Statistics Over Years".to_owned()),
            y: Axis {
                begin_at_zero: true,
                ..Axis::titled("Number of Cases")
            },
            x: Some(Axis::titled("Year")),
        }
    }

    pub fn with_title(self, title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..self
        }
    }

    /// Replaces both scales; an absent `x` drops the x axis title.
    pub fn with_scales(self, y: Axis, x: Option<Axis>) -> Self {
        Self { y, x, ..self }
    }
}

/// The three chart cards on the analytics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Overall,
    Monthly,
    Resolution,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Overall, Panel::Monthly, Panel::Resolution];

    pub fn options(self) -> ChartOptions {
        let base = ChartOptions::base();
        match self {
            Panel::Overall => base,
            Panel::Monthly => base.with_title("Monthly Crime Statistics"),
            Panel::Resolution => base
                .with_title("Crime Resolution Rate Over Time")
                .with_scales(
                    Axis {
                        begin_at_zero: true,
                        max: Some(100),
                        title: Some("Resolution Rate (%)".to_owned()),
                    },
                    None,
                ),
        }
    }

    pub fn data(self, series: &CitySeries) -> &ChartData {
        match self {
            Panel::Overall => &series.overall,
            Panel::Monthly => &series.monthly,
            Panel::Resolution => &series.resolution,
        }
    }

    /// Card heading. The overall card names the selected city even when its
    /// figures come from the fallback entry.
    pub fn heading(self, city: City) -> String {
        match self {
            Panel::Overall => format!("{} Crime Trends", city.label()),
            Panel::Monthly => "Monthly Crime Trends".to_owned(),
            Panel::Resolution => "Crime Resolution Rate".to_owned(),
        }
    }

    /// Tailwind background class for the card's accent dot.
    pub fn accent(self) -> &'static str {
        match self {
            Panel::Overall => "bg-indigo-600",
            Panel::Monthly => "bg-green-600",
            Panel::Resolution => "bg-blue-600",
        }
    }
}
