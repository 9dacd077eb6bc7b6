use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Indigo,
    Green,
    Red,
    Yellow,
}

impl Tone {
    pub fn background(self) -> &'static str {
        match self {
            Tone::Indigo => "bg-indigo-50",
            Tone::Green => "bg-green-50",
            Tone::Red => "bg-red-50",
            Tone::Yellow => "bg-yellow-50",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Tone::Indigo => "text-indigo-600",
            Tone::Green => "text-green-600",
            Tone::Red => "text-red-600",
            Tone::Yellow => "text-yellow-600",
        }
    }
}

/// A literal headline figure. Values are display strings, not counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryTile {
    pub title: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

const TOTAL: SummaryTile = SummaryTile {
    title: "Total Crimes",
    value: "1,234",
    tone: Tone::Indigo,
};
const RESOLVED: SummaryTile = SummaryTile {
    title: "Resolved Cases",
    value: "892",
    tone: Tone::Green,
};
const PENDING: SummaryTile = SummaryTile {
    title: "Pending Cases",
    value: "342",
    tone: Tone::Red,
};
const RESOLUTION_RATE: SummaryTile = SummaryTile {
    title: "Resolution Rate",
    value: "72%",
    tone: Tone::Yellow,
};

pub const LANDING_TILES: [SummaryTile; 3] = [TOTAL, RESOLVED, PENDING];
pub const ANALYTICS_TILES: [SummaryTile; 4] = [TOTAL, RESOLVED, PENDING, RESOLUTION_RATE];
