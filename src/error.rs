//! Error types for scene assets and lookups

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load {kind} texture from {path}: {source}")]
    AssetLoad {
        kind: &'static str,
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("{kind} texture is empty")]
    EmptyAsset { kind: &'static str },

    #[error("sprite encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("unknown time zone '{name}'. Use one of: {known}")]
    UnknownTimeZone { name: String, known: String },

    #[error("time zone table: {0}")]
    TimeZoneTable(#[from] csv::Error),

    #[error("time zone '{name}' has offset '{offset}', expected whole hours")]
    BadTimeZoneOffset { name: String, offset: String },

    #[error("time zone table has no entries")]
    EmptyTimeZoneTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
