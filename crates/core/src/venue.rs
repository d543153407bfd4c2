//! Venue record served by the listing endpoints.

use serde::{Deserialize, Serialize};

use crate::types::VenueId;

/// A bookable outdoor space.
///
/// Serialized with camelCase keys (`nearbyAttractions`) to match the wire
/// format the front end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub title: String,
    pub city: String,
    /// Hourly price in dollars.
    pub price: f64,
    /// Guest capacity.
    pub guests: u32,
    /// Opaque image reference resolved by the image host.
    pub image: String,
    pub amenities: Vec<String>,
    pub description: String,
    /// Average rating, 0.0 - 5.0.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
    pub nearby_attractions: Vec<String>,
}

impl Venue {
    /// Whether any amenity tag equals `tag`, ignoring case.
    ///
    /// `tag` is expected to be lower-cased already.
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a.to_lowercase() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Venue {
        Venue {
            id: 7,
            title: "Test Yard".into(),
            city: "Pasadena".into(),
            price: 40.0,
            guests: 8,
            image: "Test_Yard".into(),
            amenities: vec!["Pool".into(), "grill".into()],
            description: String::new(),
            rating: 4.5,
            reviews: 3,
            nearby_attractions: vec!["Rose Bowl".into()],
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nearbyAttractions"][0], "Rose Bowl");
        assert!(json.get("nearby_attractions").is_none());
    }

    #[test]
    fn amenity_match_ignores_tag_casing() {
        let venue = sample();
        assert!(venue.has_amenity("pool"));
        assert!(venue.has_amenity("grill"));
        assert!(!venue.has_amenity("hottub"));
    }
}
