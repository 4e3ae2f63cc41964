//! Stage two: narrow shops to those carrying any requested tag.

use std::collections::HashSet;

use shopfinder_common::{Tag, Tagging};

/// Shops from `shop_ids` tagged with at least one of `requested`.
///
/// Tag names match exactly and case-sensitively. A name that appears on
/// several tag rows resolves to all of them. Taggings that point at unknown
/// shops or tags match nothing.
///
/// Tags are a soft preference: when no shop matches, the input list is
/// returned unchanged instead of an empty one.
pub fn filter_by_tags<'a, S: AsRef<str>>(
    shop_ids: &[&'a str],
    requested: &[S],
    tags: &[Tag],
    taggings: &[Tagging],
) -> Vec<&'a str> {
    let requested: HashSet<&str> = requested.iter().map(|s| s.as_ref()).collect();

    let tag_ids: HashSet<&str> = tags
        .iter()
        .filter(|t| requested.contains(t.tag.as_str()))
        .map(|t| t.id.as_str())
        .collect();

    if tag_ids.is_empty() {
        return shop_ids.to_vec();
    }

    let tagged_shops: HashSet<&str> = taggings
        .iter()
        .filter(|t| tag_ids.contains(t.tag_id.as_str()))
        .map(|t| t.shop_id.as_str())
        .collect();

    let matched: Vec<&'a str> = shop_ids
        .iter()
        .copied()
        .filter(|id| tagged_shops.contains(id))
        .collect();

    if matched.is_empty() {
        shop_ids.to_vec()
    } else {
        matched
    }
}
