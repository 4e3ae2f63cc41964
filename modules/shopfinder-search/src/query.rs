//! Typed search request and lenient query-string parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopfinder_common::GeoPoint;

pub const DEFAULT_COUNT: i64 = 10;
pub const DEFAULT_RADIUS_M: i64 = 100;
/// Stockholm city centre.
pub const DEFAULT_LAT: f64 = 59.33258;
pub const DEFAULT_LNG: f64 = 18.0649;

/// Raw `/search` query parameters, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub count: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub tags: Option<String>,
}

impl SearchParams {
    /// Build from decoded query pairs. The first occurrence of a key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "count" => &mut params.count,
                "lat" => &mut params.lat,
                "lng" => &mut params.lng,
                "radius" => &mut params.radius,
                "tags" => &mut params.tags,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Maximum number of titles. Zero or negative returns nothing.
    pub count: i64,
    /// Radius in meters. Negative radius matches no shop.
    pub radius: i64,
    pub lat: f64,
    pub lng: f64,
    /// `None` skips the tag filter entirely.
    pub tags: Option<Vec<String>>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS_M,
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
            tags: None,
        }
    }
}

impl SearchQuery {
    /// Parse raw parameters, never failing: anything missing or unparsable
    /// takes its default.
    pub fn from_params(params: &SearchParams) -> Self {
        let defaults = Self::default();
        Self {
            count: parse_or("count", params.count.as_deref(), defaults.count),
            radius: parse_or("radius", params.radius.as_deref(), defaults.radius),
            lat: parse_or("lat", params.lat.as_deref(), defaults.lat),
            lng: parse_or("lng", params.lng.as_deref(), defaults.lng),
            tags: params.tags.as_deref().and_then(parse_tags),
        }
    }

    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    pub fn radius_m(&self) -> f64 {
        self.radius as f64
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<&str>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            debug!(param = name, value = raw, "Unparsable search parameter, using default");
            default
        }
    }
}

/// Split a comma-separated tag list, trimming each token. An empty string
/// means no tag filter.
fn parse_tags(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').map(|t| t.trim().to_string()).collect())
}
