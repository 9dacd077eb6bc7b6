use std::fmt;

use serde::{Serialize, Serializer};

use crate::city::City;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: &'static [u32],
    pub fill: bool,
    pub border_color: Rgb,
    pub tension: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: &'static [&'static str],
    pub datasets: &'static [Dataset],
}

impl ChartData {
    /// Largest value across every dataset, 0 when empty.
    pub fn max_value(&self) -> u32 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySeries {
    pub overall: ChartData,
    pub monthly: ChartData,
    pub resolution: ChartData,
}

const TEAL: Rgb = Rgb(75, 192, 192);
const PINK: Rgb = Rgb(255, 99, 132);
const BLUE: Rgb = Rgb(53, 162, 235);
const ORANGE: Rgb = Rgb(255, 159, 64);

const TENSION: f32 = 0.1;

const YEARS: &[&str] = &["2019", "2020", "2021", "2022", "2023"];
const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const fn line(label: &'static str, data: &'static [u32], border_color: Rgb) -> Dataset {
    Dataset {
        label,
        data,
        fill: false,
        border_color,
        tension: TENSION,
    }
}

static DELHI: CitySeries = CitySeries {
    overall: ChartData {
        labels: YEARS,
        datasets: &[
            line("Theft Cases", &[65, 59, 80, 81, 56], TEAL),
            line("Assault Cases", &[28, 48, 40, 19, 86], PINK),
            line("Burglary Cases", &[45, 25, 36, 67, 45], BLUE),
        ],
    },
    monthly: ChartData {
        labels: MONTHS,
        datasets: &[
            line("Violent Crimes", &[45, 59, 80, 81, 56, 55], ORANGE),
            line("Property Crimes", &[28, 48, 40, 19, 86, 27], TEAL),
        ],
    },
    resolution: ChartData {
        labels: YEARS,
        datasets: &[line("Resolution Rate", &[65, 72, 78, 82, 85], TEAL)],
    },
};

static MUMBAI: CitySeries = CitySeries {
    overall: ChartData {
        labels: YEARS,
        datasets: &[
            line("Theft Cases", &[55, 49, 70, 71, 46], TEAL),
            line("Assault Cases", &[38, 58, 50, 29, 76], PINK),
            line("Burglary Cases", &[35, 15, 26, 57, 35], BLUE),
        ],
    },
    monthly: ChartData {
        labels: MONTHS,
        datasets: &[
            line("Violent Crimes", &[35, 49, 70, 71, 46, 45], ORANGE),
            line("Property Crimes", &[18, 38, 30, 9, 76, 17], TEAL),
        ],
    },
    resolution: ChartData {
        labels: YEARS,
        datasets: &[line("Resolution Rate", &[75, 82, 88, 92, 95], TEAL)],
    },
};

/// Cities with sample figures. Everything else falls back to the default city.
static CITY_SERIES: &[(City, &CitySeries)] = &[(City::Delhi, &DELHI), (City::Mumbai, &MUMBAI)];

impl CitySeries {
    fn entry(city: City) -> Option<&'static CitySeries> {
        CITY_SERIES
            .iter()
            .find(|(key, _)| *key == city)
            .map(|(_, series)| *series)
    }

    pub fn has_entry(city: City) -> bool {
        Self::entry(city).is_some()
    }

    /// Fallback lookup: absent cities resolve to the default city's series.
    pub fn lookup(city: City) -> &'static CitySeries {
        Self::entry(city).unwrap_or(&DELHI)
    }
}
