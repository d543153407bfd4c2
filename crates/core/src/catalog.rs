//! The seeded, read-only venue catalog.
//!
//! Venues are built once per process and never mutated. [`Catalog`] is a
//! cheap `Arc` handle so handlers can share it without copying records.

use std::sync::{Arc, LazyLock};

use crate::types::VenueId;
use crate::venue::Venue;

static SEED: LazyLock<Arc<[Venue]>> = LazyLock::new(|| seed_venues().into());

/// Immutable, ordered collection of venues.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Arc<[Venue]>,
}

impl Catalog {
    /// The process-wide seed catalog.
    pub fn seeded() -> Self {
        Self {
            venues: Arc::clone(&SEED),
        }
    }

    /// Build a catalog from arbitrary venues (order is preserved).
    pub fn from_venues(venues: Vec<Venue>) -> Self {
        Self {
            venues: venues.into(),
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Look up a single venue by id.
    pub fn get(&self, id: VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: VenueId) -> bool {
        self.get(id).is_some()
    }
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: VenueId,
    title: &str,
    city: &str,
    price: f64,
    guests: u32,
    amenities: &[&str],
    description: &str,
    rating: f64,
    reviews: u32,
    nearby: &[&str],
) -> Venue {
    Venue {
        id,
        title: title.to_string(),
        city: city.to_string(),
        price,
        guests,
        image: title.replace(' ', "_"),
        amenities: amenities.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        rating,
        reviews,
        nearby_attractions: nearby.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_venues() -> Vec<Venue> {
    vec![
        venue(
            1,
            "Beachfront Garden Oasis",
            "Venice",
            90.0,
            25,
            &["grill", "firepit", "pool"],
            "A stunning beachfront garden space in Venice, where the Pacific breeze meets lush \
             greenery. Features include a modern grill, cozy fire pit, and ambient lighting \
             throughout the space. Perfect for intimate gatherings and outdoor dining with ocean \
             views.",
            4.8,
            24,
            &["Venice Beach Boardwalk", "Abbot Kinney Blvd", "Santa Monica Pier"],
        ),
        venue(
            2,
            "Bohemian Backyard",
            "Silver Lake",
            75.0,
            15,
            &["pool", "hottub", "outdoor_kitchen"],
            "A vibrant, artistic outdoor space in the heart of Silver Lake. This eclectic backyard \
             features a large pool, hot tub, and fully equipped outdoor kitchen. The perfect \
             setting for creative gatherings and pool parties with a bohemian flair.",
            4.9,
            31,
            &["Silver Lake Reservoir", "Echo Park Lake", "Dodger Stadium"],
        ),
        venue(
            3,
            "Los Angeles Downtown Rooftop",
            "Downtown",
            65.0,
            20,
            &["outdoor_kitchen", "firepit", "playground"],
            "A modern rooftop space with panoramic views of the LA skyline. Features a fully \
             equipped outdoor kitchen, cozy fire pit, and a small playground area for kids. \
             Perfect for corporate events and family gatherings with stunning city views.",
            4.7,
            18,
            &["Staples Center", "Grand Park", "The Broad Museum"],
        ),
        venue(
            4,
            "Ocean View Patio",
            "Malibu",
            85.0,
            20,
            &["pool", "grill", "playground"],
            "A beautiful oceanfront patio in Malibu with direct access to the beach. Features a \
             large pool, outdoor grill, and a playground. Perfect for beach parties and family \
             gatherings with stunning Pacific views and sunset watching.",
            4.9,
            42,
            &["Malibu Pier", "Zuma Beach", "Point Dume"],
        ),
        venue(
            5,
            "Santa Monica Garden",
            "Santa Monica",
            55.0,
            12,
            &["firepit", "grill", "hottub"],
            "A serene garden space in Santa Monica featuring native California plants and coastal \
             influences. Features a cozy fire pit, outdoor grill, and hot tub. Ideal for intimate \
             gatherings and outdoor dining with a coastal breeze.",
            4.8,
            28,
            &["Santa Monica Pier", "Third Street Promenade", "Palisades Park"],
        ),
        venue(
            6,
            "Urban Rooftop Garden",
            "West Hollywood",
            60.0,
            15,
            &["pool", "outdoor_kitchen", "firepit"],
            "A modern rooftop garden in West Hollywood with city views and desert-inspired \
             landscaping. Features a large pool, fully equipped outdoor kitchen, and fire pit. \
             Perfect for winter gatherings and outdoor dining with a sophisticated urban vibe.",
            4.7,
            35,
            &["Sunset Strip", "Runyon Canyon", "The Comedy Store"],
        ),
    ]
}
