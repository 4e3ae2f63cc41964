use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;
use crate::distance::{filter_by_distance, shop_ids};
use crate::query::SearchQuery;
use crate::ranking::rank_and_select;
use crate::tags::filter_by_tags;

/// Body of a `/search` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<String>,
}

/// Run a query against the dataset: distance filter, then the tag filter when
/// tags were requested, then popularity ranking. Returns product titles in
/// rank order.
pub fn search(dataset: &Dataset, query: &SearchQuery) -> Vec<String> {
    let nearby = filter_by_distance(dataset.shops(), query.origin(), query.radius_m());
    let in_range = shop_ids(&nearby);

    let candidates = match query.tags.as_deref() {
        Some(tags) if !tags.is_empty() => {
            filter_by_tags(&in_range, tags, dataset.tags(), dataset.taggings())
        }
        _ => in_range.clone(),
    };

    let titles = rank_and_select(&candidates, dataset.products(), query.limit());

    debug!(
        lat = query.lat,
        lng = query.lng,
        radius = query.radius,
        in_range = in_range.len(),
        after_tags = candidates.len(),
        returned = titles.len(),
        "Search complete"
    );

    titles
}
