/// Venue identifiers are plain integers assigned in the seed catalog.
pub type VenueId = i64;

/// User identifiers come from the `sub` claim of the bearer token.
pub type UserId = i64;
