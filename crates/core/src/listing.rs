//! Listing query engine.
//!
//! Filters a [`Catalog`] by city, guest capacity and amenities. Each filter is
//! an independent predicate over a single [`Venue`]; a venue is returned when
//! every present filter accepts it. Catalog order is preserved.
//!
//! Malformed input never fails a query: an unparseable guest count simply
//! disables the guest filter.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Catalog;
use crate::venue::Venue;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Raw filter parameters as received on the query string.
///
/// Absent and empty values both mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// String-encoded integer; see [`parse_guest_count`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<String>,
    /// Comma-separated amenity tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
}

impl ListingQuery {
    /// Build a query from raw key/value pairs. The first occurrence of each
    /// key wins and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = ListingQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut query.city,
                "guests" => &mut query.guests,
                "amenities" => &mut query.amenities,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// True when no parameter would apply a filter.
    pub fn is_unfiltered(&self) -> bool {
        present(&self.city).is_none()
            && present(&self.guests).is_none()
            && present(&self.amenities).is_none()
    }
}

/// Guest count in a JSON search body: a number, or the string value of a
/// select option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GuestInput {
    Count(i64),
    Fraction(f64),
    Text(String),
}

impl GuestInput {
    /// The string form fed to [`parse_guest_count`]; `3.5` becomes `"3.5"`
    /// and so filters like `"3"`.
    fn into_raw(self) -> String {
        match self {
            GuestInput::Count(n) => n.to_string(),
            GuestInput::Fraction(f) => f.to_string(),
            GuestInput::Text(s) => s,
        }
    }
}

/// Amenities in a JSON search body: a list of tags, or a comma-separated
/// string as on the query string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AmenityInput {
    List(Vec<String>),
    Text(String),
}

/// JSON body for `POST /yards/search`.
///
/// Every field is optional and lenient: a value of the wrong JSON type is
/// treated as absent instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub guests: Option<GuestInput>,
    #[serde(default, deserialize_with = "lenient")]
    pub amenities: Option<AmenityInput>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Valid(value)) => Some(value),
        Some(Lenient::Invalid(_)) | None => None,
    })
}

impl From<SearchRequest> for ListingQuery {
    fn from(req: SearchRequest) -> Self {
        let amenities = req.amenities.and_then(|a| match a {
            AmenityInput::List(list) if list.is_empty() => None,
            AmenityInput::List(list) => Some(list.join(",")),
            AmenityInput::Text(s) => Some(s),
        });

        ListingQuery {
            city: req.city,
            guests: req.guests.map(GuestInput::into_raw),
            amenities,
        }
    }
}

/// Echo of the filters that were applied.
///
/// `city` and `amenities` carry the caller's values (amenities only split
/// and trimmed, casing kept). `guests` is the parsed number and is omitted
/// when the raw value did not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

/// Result of a listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub yards: Vec<Venue>,
    pub total: usize,
    pub filters: AppliedFilters,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Parse a guest count the lenient way browsers parse integers.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits is taken and anything after it ignored (`"20abc"` is 20,
/// `"3.7"` is 3). Returns `None` when no digit follows. Values beyond the
/// `i64` range saturate.
pub fn parse_guest_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Split a comma-separated amenity list, trimming each token.
///
/// Empty tokens are kept: `" "` yields a single empty token.
pub fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on the venue city.
///
/// `needle` must already be lower-cased.
pub fn matches_city(venue: &Venue, needle: &str) -> bool {
    venue.city.to_lowercase().contains(needle)
}

/// Capacity is at least `min_guests`.
pub fn matches_guests(venue: &Venue, min_guests: i64) -> bool {
    i64::from(venue.guests) >= min_guests
}

/// At least one of the venue's amenities appears in `tokens`.
///
/// `tokens` must already be lower-cased.
pub fn matches_amenities(venue: &Venue, tokens: &[String]) -> bool {
    tokens.iter().any(|t| venue.has_amenity(t))
}

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Normalized predicates derived from a [`ListingQuery`].
#[derive(Debug, Default)]
struct Criteria {
    city: Option<String>,
    guests: Option<i64>,
    amenities: Option<Vec<String>>,
}

impl Criteria {
    fn accepts(&self, venue: &Venue) -> bool {
        self.city.as_deref().map_or(true, |c| matches_city(venue, c))
            && self.guests.map_or(true, |g| matches_guests(venue, g))
            && self
                .amenities
                .as_deref()
                .map_or(true, |tokens| matches_amenities(venue, tokens))
    }
}

/// Run a listing query against the catalog.
///
/// Pure: the catalog is not modified and the same inputs always yield the
/// same output.
pub fn search(catalog: &Catalog, query: &ListingQuery) -> ListingResponse {
    let city = present(&query.city);
    let guests = present(&query.guests).and_then(parse_guest_count);
    let amenities = present(&query.amenities).map(split_amenities);

    let criteria = Criteria {
        city: city.map(str::to_lowercase),
        guests,
        amenities: amenities
            .as_ref()
            .map(|tokens| tokens.iter().map(|t| t.to_lowercase()).collect()),
    };

    let yards: Vec<Venue> = catalog
        .venues()
        .iter()
        .filter(|v| criteria.accepts(v))
        .cloned()
        .collect();

    ListingResponse {
        total: yards.len(),
        yards,
        filters: AppliedFilters {
            city: city.map(str::to_string),
            guests,
            amenities,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VenueId;

    fn query(city: Option<&str>, guests: Option<&str>, amenities: Option<&str>) -> ListingQuery {
        ListingQuery {
            city: city.map(String::from),
            guests: guests.map(String::from),
            amenities: amenities.map(String::from),
        }
    }

    fn ids(resp: &ListingResponse) -> Vec<VenueId> {
        resp.yards.iter().map(|v| v.id).collect()
    }

    // -- parse_guest_count --

    #[test]
    fn parse_plain_integer() {
        assert_eq!(parse_guest_count("20"), Some(20));
        assert_eq!(parse_guest_count("0"), Some(0));
    }

    #[test]
    fn parse_ignores_leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse_guest_count("  12"), Some(12));
        assert_eq!(parse_guest_count("20abc"), Some(20));
        assert_eq!(parse_guest_count("3.7"), Some(3));
    }

    #[test]
    fn parse_accepts_sign() {
        assert_eq!(parse_guest_count("-5"), Some(-5));
        assert_eq!(parse_guest_count("+8"), Some(8));
    }

    #[test]
    fn parse_does_not_honor_hex_prefix() {
        assert_eq!(parse_guest_count("0x14"), Some(0));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(parse_guest_count("abc"), None);
        assert_eq!(parse_guest_count(""), None);
        assert_eq!(parse_guest_count("-"), None);
        assert_eq!(parse_guest_count(" x5"), None);
    }

    #[test]
    fn parse_saturates_on_overflow() {
        assert_eq!(parse_guest_count("99999999999999999999999"), Some(i64::MAX));
    }

    // -- scenarios over the seed catalog --

    #[test]
    fn no_parameters_returns_whole_catalog() {
        let resp = search(&Catalog::seeded(), &ListingQuery::default());
        assert_eq!(resp.total, 6);
        assert_eq!(ids(&resp), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(resp.filters, AppliedFilters::default());
    }

    #[test]
    fn city_venice_returns_single_venue() {
        let resp = search(&Catalog::seeded(), &query(Some("Venice"), None, None));
        assert_eq!(ids(&resp), vec![1]);
        assert_eq!(resp.total, 1);
    }

    #[test]
    fn city_match_is_case_insensitive_substring() {
        let resp = search(&Catalog::seeded(), &query(Some("santa MON"), None, None));
        assert_eq!(ids(&resp), vec![5]);

        let resp = search(&Catalog::seeded(), &query(Some("o"), None, None));
        // Downtown, Santa Monica, West Hollywood.
        assert_eq!(ids(&resp), vec![3, 5, 6]);
    }

    #[test]
    fn guests_filter_keeps_capacity_at_least_threshold() {
        let resp = search(&Catalog::seeded(), &query(None, Some("20"), None));
        assert_eq!(ids(&resp), vec![1, 3, 4]);
        assert_eq!(resp.filters.guests, Some(20));
    }

    #[test]
    fn invalid_guest_value_is_skipped_and_not_echoed() {
        let resp = search(&Catalog::seeded(), &query(None, Some("abc"), None));
        assert_eq!(resp.total, 6);
        assert_eq!(resp.filters.guests, None);

        let json = serde_json::to_value(&resp.filters).unwrap();
        assert!(json.get("guests").is_none());
    }

    #[test]
    fn amenities_match_any_requested_tag() {
        let resp = search(&Catalog::seeded(), &query(None, None, Some("pool,firepit")));
        assert_eq!(ids(&resp), vec![1, 2, 3, 4, 5, 6]);

        let resp = search(&Catalog::seeded(), &query(None, None, Some("hottub")));
        assert_eq!(ids(&resp), vec![2, 5]);
    }

    #[test]
    fn amenities_are_trimmed_and_case_folded() {
        let resp = search(&Catalog::seeded(), &query(None, None, Some(" PlayGround , HOTTUB")));
        assert_eq!(ids(&resp), vec![2, 3, 4, 5]);
        assert_eq!(
            resp.filters.amenities,
            Some(vec!["PlayGround".to_string(), "HOTTUB".to_string()])
        );
    }

    #[test]
    fn whitespace_only_amenities_match_nothing() {
        let resp = search(&Catalog::seeded(), &query(None, None, Some("   ")));
        assert_eq!(resp.total, 0);
        assert_eq!(resp.filters.amenities, Some(vec![String::new()]));
    }

    #[test]
    fn empty_strings_apply_no_filter() {
        let resp = search(&Catalog::seeded(), &query(Some(""), Some(""), Some("")));
        assert_eq!(resp.total, 6);
        assert_eq!(resp.filters, AppliedFilters::default());
    }

    #[test]
    fn filters_compose_with_and() {
        let resp = search(
            &Catalog::seeded(),
            &query(Some("a"), Some("15"), Some("pool")),
        );
        // Cities containing "a": Silver Lake, Malibu, Santa Monica.
        // Capacity >= 15 and pool: Silver Lake (2), Malibu (4).
        assert_eq!(ids(&resp), vec![2, 4]);
    }

    #[test]
    fn echo_keeps_raw_city() {
        let resp = search(&Catalog::seeded(), &query(Some("VeNiCe"), None, None));
        assert_eq!(resp.filters.city.as_deref(), Some("VeNiCe"));
    }

    #[test]
    fn catalog_is_untouched_by_search() {
        let catalog = Catalog::seeded();
        let before = catalog.venues().to_vec();
        let _ = search(&catalog, &query(Some("Malibu"), Some("5"), Some("grill")));
        assert_eq!(catalog.venues(), before.as_slice());
    }

    #[test]
    fn search_is_deterministic() {
        let catalog = Catalog::seeded();
        let q = query(None, Some("15"), Some("grill,pool"));
        assert_eq!(search(&catalog, &q), search(&catalog, &q));
    }

    #[test]
    fn unfiltered_detection() {
        assert!(ListingQuery::default().is_unfiltered());
        assert!(query(Some(""), None, Some("")).is_unfiltered());
        assert!(!query(None, Some("abc"), None).is_unfiltered());
    }

    // -- JSON search body --

    #[test]
    fn search_request_converts_to_listing_query() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "city": "Malibu",
            "guests": "10",
            "amenities": ["pool", "grill"],
        }))
        .unwrap();

        let q = ListingQuery::from(req);
        assert_eq!(q, query(Some("Malibu"), Some("10"), Some("pool,grill")));
    }

    #[test]
    fn search_request_accepts_numeric_guests_and_drops_empty_amenities() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "guests": 15,
            "amenities": [],
        }))
        .unwrap();

        let q = ListingQuery::from(req);
        assert_eq!(q, query(None, Some("15"), None));
    }

    #[test]
    fn search_request_truncates_fractional_guests() {
        let req: SearchRequest =
            serde_json::from_value(serde_json::json!({ "guests": 3.5 })).unwrap();
        assert_eq!(req.guests, Some(GuestInput::Fraction(3.5)));

        let resp = search(&Catalog::seeded(), &ListingQuery::from(req));
        assert_eq!(resp.filters.guests, Some(3));
        assert_eq!(resp.total, 6);
    }

    #[test]
    fn search_request_accepts_comma_separated_amenities() {
        let req: SearchRequest =
            serde_json::from_value(serde_json::json!({ "amenities": "hottub, grill" })).unwrap();
        assert_eq!(
            ListingQuery::from(req),
            query(None, None, Some("hottub, grill"))
        );
    }

    #[test]
    fn search_request_drops_values_of_the_wrong_type() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "city": 12,
            "guests": true,
            "amenities": { "pool": true },
        }))
        .unwrap();

        assert_eq!(req, SearchRequest::default());
        assert!(ListingQuery::from(req).is_unfiltered());
    }

    #[test]
    fn search_request_treats_null_as_absent() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "city": null,
            "guests": null,
            "amenities": null,
        }))
        .unwrap();
        assert_eq!(req, SearchRequest::default());
    }

    // -- query-string pairs --

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let q = ListingQuery::from_pairs([
            ("guests", "5"),
            ("city", "Malibu"),
            ("guests", "20"),
            ("city", "Venice"),
        ]);
        assert_eq!(q, query(Some("Malibu"), Some("5"), None));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let q = ListingQuery::from_pairs([("page", "2"), ("amenities", "pool")]);
        assert_eq!(q, query(None, None, Some("pool")));
    }
}
