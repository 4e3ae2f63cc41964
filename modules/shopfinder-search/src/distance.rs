//! Stage one: keep shops strictly inside the search radius.

use shopfinder_common::{GeoPoint, Shop};

/// A shop that passed the radius check, with its distance from the query
/// origin. Lives only for the duration of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyShop<'a> {
    pub shop_id: &'a str,
    pub distance_m: f64,
}

/// Shops with `distance < radius_m`, farthest first.
///
/// The farthest-first order matches the legacy service. It has no effect on
/// the final titles since products are re-ranked by popularity afterwards.
/// A negative radius keeps nothing; NaN distances fail the comparison.
pub fn filter_by_distance<'a>(shops: &'a [Shop], origin: GeoPoint, radius_m: f64) -> Vec<NearbyShop<'a>> {
    let mut nearby: Vec<NearbyShop<'a>> = shops
        .iter()
        .map(|shop| NearbyShop {
            shop_id: shop.id.as_str(),
            distance_m: origin.distance_to(&shop.location()),
        })
        .filter(|s| s.distance_m < radius_m)
        .collect();

    // No NaN survives the filter above, so total_cmp orders plain magnitudes.
    nearby.sort_by(|a, b| b.distance_m.total_cmp(&a.distance_m));
    nearby
}

/// Project to the shop id list handed to the next stage.
pub fn shop_ids<'a>(nearby: &[NearbyShop<'a>]) -> Vec<&'a str> {
    nearby.iter().map(|s| s.shop_id).collect()
}
