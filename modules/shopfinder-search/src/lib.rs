//! Nearby popular products search.
//!
//! The query is a strict three-stage pipeline over an immutable [`Dataset`]:
//! distance filter, optional tag filter, popularity ranking. Distances are
//! computed into request-local buffers so concurrent queries never observe
//! each other.

pub mod dataset;
pub mod distance;
pub mod pipeline;
pub mod query;
pub mod ranking;
pub mod tags;

pub use dataset::{Dataset, DatasetSummary};
pub use distance::{filter_by_distance, NearbyShop};
pub use pipeline::{search, SearchResponse};
pub use query::{SearchParams, SearchQuery};
pub use ranking::rank_and_select;
pub use tags::filter_by_tags;
