use serde::Serialize;

use crate::city::City;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// Whole-country view shown while no city is selected.
pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d241317.5099783447!2d78.96288!3d20.593684!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x30635ff06b92b791%3A0xd78c4fa1854213a6!2sIndia!5e0!3m2!1sen!2sin!4v1709654321!5m2!1sen!2sin";

const EMBED_PREFIX: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d241317.5099783447";
const EMBED_VIEW: &str = "!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x30635ff06b92b791%3A0xd78c4fa1854213a6";
const EMBED_SUFFIX: &str = "!5e0!3m2!1sen!2sin!4v1709654321!5m2!1sen!2sin";

const CITY_ZOOM: u8 = 11;

pub fn coordinates(city: City) -> Coordinates {
    let (latitude, longitude) = match city {
        City::Delhi => (28.6139, 77.2090),
        City::Mumbai => (19.0760, 72.8777),
        City::Bangalore => (12.9716, 77.5946),
        City::Chennai => (13.0827, 80.2707),
        City::Kolkata => (22.5726, 88.3639),
        City::Hyderabad => (17.3850, 78.4867),
        City::Pune => (18.5204, 73.8567),
        City::Ahmedabad => (23.0225, 72.5714),
    };
    Coordinates {
        latitude,
        longitude,
        zoom: CITY_ZOOM,
    }
}

/// Embed URL for the iframe. `f64` display is shortest round-trip, so
/// `77.2090` is written as `77.209`.
pub fn map_embed_url(city: Option<City>) -> String {
    let Some(city) = city else {
        return DEFAULT_MAP_EMBED_URL.to_owned();
    };
    let Coordinates {
        latitude,
        longitude,
        zoom,
    } = coordinates(city);
    format!(
        "{EMBED_PREFIX}!2d{longitude}!3d{latitude}{EMBED_VIEW}!2s{label}{EMBED_SUFFIX}&zoom={zoom}",
        label = city.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_yields_whole_country_view() {
        assert_eq!(map_embed_url(None), DEFAULT_MAP_EMBED_URL);
    }

    #[test]
    fn city_url_carries_coordinates_zoom_and_label() {
        for city in City::ALL {
            let coords = coordinates(city);
            let url = map_embed_url(Some(city));
            assert!(url.contains(&format!("!2d{}", coords.longitude)), "{url}");
            assert!(url.contains(&format!("!3d{}", coords.latitude)), "{url}");
            assert!(url.contains(&format!("!2s{}!5e0", city.label())), "{url}");
            assert!(url.ends_with(&format!("&zoom={}", coords.zoom)), "{url}");
        }
    }

    #[test]
    fn delhi_url_matches_expected_literal() {
        assert_eq!(
            map_embed_url(Some(City::Delhi)),
            "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d241317.5099783447!2d77.209!3d28.6139!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x30635ff06b92b791%3A0xd78c4fa1854213a6!2sDelhi!5e0!3m2!1sen!2sin!4v1709654321!5m2!1sen!2sin&zoom=11"
        );
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        let url = map_embed_url(Some(City::Hyderabad));
        assert!(url.contains("!3d17.385!"), "{url}");
        let url = map_embed_url(Some(City::Mumbai));
        assert!(url.contains("!3d19.076!"), "{url}");
    }
}
