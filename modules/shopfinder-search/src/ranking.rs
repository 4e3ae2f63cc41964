//! Stage three: rank products from the surviving shops by popularity.

use std::cmp::Ordering;
use std::collections::HashSet;

use shopfinder_common::Product;

/// Titles of the `count` most popular products sold by `shop_ids`.
///
/// Ties keep table order (the sort is stable). Products with a NaN popularity
/// rank after every real value. Products whose shop is not in `shop_ids`,
/// including orphans, are never selected.
pub fn rank_and_select(shop_ids: &[&str], products: &[Product], count: usize) -> Vec<String> {
    if count == 0 || shop_ids.is_empty() {
        return Vec::new();
    }

    let shops: HashSet<&str> = shop_ids.iter().copied().collect();

    let mut selected: Vec<&Product> = products
        .iter()
        .filter(|p| shops.contains(p.shop_id.as_str()))
        .collect();

    selected.sort_by(|a, b| by_popularity_desc(a.popularity, b.popularity));

    selected
        .into_iter()
        .take(count)
        .map(|p| p.title.clone())
        .collect()
}

fn by_popularity_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, shop_id: &str, popularity: f64) -> Product {
        Product {
            id: id.to_string(),
            shop_id: shop_id.to_string(),
            title: format!("title-{id}"),
            popularity,
        }
    }

    fn titles(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| format!("title-{id}")).collect()
    }

    #[test]
    fn stable_on_ties_and_truncates() {
        let products = vec![
            product("p1", "a", 5.0),
            product("p2", "a", 5.0),
            product("p3", "a", 3.0),
            product("p4", "a", 9.0),
        ];
        assert_eq!(rank_and_select(&["a"], &products, 2), titles(&["p4", "p1"]));
        assert_eq!(
            rank_and_select(&["a"], &products, 10),
            titles(&["p4", "p1", "p2", "p3"])
        );
    }

    #[test]
    fn excludes_products_of_other_shops() {
        let products = vec![
            product("p1", "a", 1.0),
            product("p2", "b", 100.0),
            product("p3", "orphan", 50.0),
        ];
        assert_eq!(rank_and_select(&["a"], &products, 5), titles(&["p1"]));
    }

    #[test]
    fn zero_count_is_empty() {
        let products = vec![product("p1", "a", 1.0)];
        assert!(rank_and_select(&["a"], &products, 0).is_empty());
    }

    #[test]
    fn no_shops_is_empty() {
        let products = vec![product("p1", "a", 1.0)];
        assert!(rank_and_select(&[], &products, 5).is_empty());
    }

    #[test]
    fn shop_order_does_not_affect_ranking() {
        let products = vec![product("p1", "a", 1.0), product("p2", "b", 2.0)];
        assert_eq!(
            rank_and_select(&["a", "b"], &products, 5),
            rank_and_select(&["b", "a"], &products, 5)
        );
    }

    #[test]
    fn nan_popularity_ranks_last() {
        let products = vec![
            product("p1", "a", f64::NAN),
            product("p2", "a", -1.0),
            product("p3", "a", 2.0),
        ];
        assert_eq!(
            rank_and_select(&["a"], &products, 5),
            titles(&["p3", "p2", "p1"])
        );
    }
}
