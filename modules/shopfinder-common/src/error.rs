use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopfinderError {
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing data table: {}", .0.display())]
    MissingTable(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
