use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the eight cities the dashboard offers in its selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    #[default]
    Delhi,
    Mumbai,
    Bangalore,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
    Ahmedabad,
}

impl City {
    /// Selector order.
    pub const ALL: [City; 8] = [
        City::Delhi,
        City::Mumbai,
        City::Bangalore,
        City::Chennai,
        City::Kolkata,
        City::Hyderabad,
        City::Pune,
        City::Ahmedabad,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            City::Delhi => "delhi",
            City::Mumbai => "mumbai",
            City::Bangalore => "bangalore",
            City::Chennai => "chennai",
            City::Kolkata => "kolkata",
            City::Hyderabad => "hyderabad",
            City::Pune => "pune",
            City::Ahmedabad => "ahmedabad",
        }
    }

    /// Capitalized slug, used for option text, map labels and chart headings.
    pub fn label(self) -> String {
        capitalize(self.slug())
    }

    /// Empty or unrecognized selector values mean "no selection".
    pub fn from_selector(value: &str) -> Option<City> {
        value.parse().ok()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCity(pub String);

impl fmt::Display for UnknownCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown city identifier {:?}", self.0)
    }
}

impl std::error::Error for UnknownCity {}

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.slug() == s)
            .ok_or_else(|| UnknownCity(s.to_owned()))
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for city in City::ALL {
            assert_eq!(city.slug().parse::<City>(), Ok(city));
        }
    }

    #[test]
    fn labels_capitalize_first_letter_only() {
        assert_eq!(City::Delhi.label(), "Delhi");
        assert_eq!(City::Ahmedabad.label(), "Ahmedabad");
        assert_eq!(capitalize("hyderabad"), "Hyderabad");
        assert_eq!(capitalize("nEW"), "NEW");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn empty_selector_value_is_no_selection() {
        assert_eq!(City::from_selector(""), None);
        assert_eq!(City::from_selector("Delhi"), None);
        assert_eq!(City::from_selector("pune"), Some(City::Pune));
    }

    #[test]
    fn unknown_city_reports_rejected_value() {
        let err = "atlantis".parse::<City>().unwrap_err();
        assert_eq!(err, UnknownCity("atlantis".to_owned()));
        assert_eq!(err.to_string(), "unknown city identifier \"atlantis\"");
    }

    #[test]
    fn default_city_is_delhi() {
        assert_eq!(City::default(), City::Delhi);
    }

    #[test]
    fn serializes_as_lowercase_slug() {
        assert_eq!(
            serde_json::to_string(&City::Kolkata).unwrap(),
            "\"kolkata\""
        );
    }
}
