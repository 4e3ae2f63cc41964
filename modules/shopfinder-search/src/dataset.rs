//! Immutable in-memory tables.
//!
//! A [`Dataset`] is built once at startup (or from fixtures in tests) and then
//! shared read-only behind an `Arc`. Nothing in the query path mutates it.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use shopfinder_common::{Product, Shop, ShopfinderError, Tag, Tagging};

pub const SHOPS_FILE: &str = "shops.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const TAGS_FILE: &str = "tags.csv";
pub const TAGGINGS_FILE: &str = "taggings.csv";

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    shops: Vec<Shop>,
    products: Vec<Product>,
    tags: Vec<Tag>,
    taggings: Vec<Tagging>,
}

/// Row counts, for the startup log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub shops: usize,
    pub products: usize,
    pub tags: usize,
    pub taggings: usize,
}

impl Dataset {
    pub fn new(
        shops: Vec<Shop>,
        products: Vec<Product>,
        tags: Vec<Tag>,
        taggings: Vec<Tagging>,
    ) -> Self {
        Self {
            shops,
            products,
            tags,
            taggings,
        }
    }

    /// Load all four tables from `dir`. Either every table loads or none does.
    pub fn load(dir: &Path) -> Result<Self, ShopfinderError> {
        let shops = read_table::<Shop>(dir, SHOPS_FILE)?;
        let products = read_table::<Product>(dir, PRODUCTS_FILE)?;
        let tags = read_table::<Tag>(dir, TAGS_FILE)?;
        let taggings = read_table::<Tagging>(dir, TAGGINGS_FILE)?;

        let dataset = Self::new(shops, products, tags, taggings);
        let summary = dataset.summary();
        info!(
            dir = %dir.display(),
            shops = summary.shops,
            products = summary.products,
            tags = summary.tags,
            taggings = summary.taggings,
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn taggings(&self) -> &[Tagging] {
        &self.taggings
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            shops: self.shops.len(),
            products: self.products.len(),
            tags: self.tags.len(),
            taggings: self.taggings.len(),
        }
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, ShopfinderError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(ShopfinderError::MissingTable(path));
    }

    // Cell text is kept verbatim; only header names are trimmed.
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(&path)
        .map_err(|source| ShopfinderError::Csv {
            path: path.clone(),
            source,
        })?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| ShopfinderError::Csv { path, source })
}
