use sampler::SampleError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

/// Why an existing dataset file could not be turned back into a dataset.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not a dataset file")]
    BadMagic,

    #[error("dataset format version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("malformed dataset: {0}")]
    Malformed(#[from] bincode::Error),

    #[error("unexpected data after the end of the dataset")]
    TrailingData,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("export path {} collides with the dataset file", .0.display())]
    PathCollision(PathBuf),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("could not write dataset to {}: {source}", .path.display())]
    CachePath { path: PathBuf, source: EncodeError },

    #[error("could not load dataset from {}: {source}", .path.display())]
    Deserialization { path: PathBuf, source: DecodeError },

    #[error("trajectory collection failed: {0}")]
    Sample(#[from] SampleError),
}
