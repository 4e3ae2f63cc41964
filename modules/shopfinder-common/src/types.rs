use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::GeoPoint;

// --- Tables ---
//
// Rows mirror the CSV files in the data directory. Columns not named here
// (shop names, product quantities, the taggings row id) are ignored on load.
// Empty numeric cells load as NaN rather than failing the whole table.

/// A venue with a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    #[serde(deserialize_with = "nan_if_empty")]
    pub lat: f64,
    #[serde(deserialize_with = "nan_if_empty")]
    pub lng: f64,
}

impl Shop {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// An item sold by exactly one shop. Higher `popularity` ranks first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub shop_id: String,
    pub title: String,
    #[serde(deserialize_with = "nan_if_empty")]
    pub popularity: f64,
}

/// A label. Names are not guaranteed unique across rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub tag: String,
}

/// Many-to-many association between a shop and a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tagging {
    pub shop_id: String,
    pub tag_id: String,
}

fn nan_if_empty<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
