//! Acquires an offline dataset of game trajectories, generating it at most
//! once per cache path.

mod cache;
mod codec;
mod error;
mod json_export;

pub use cache::{Acquisition, CacheSettings, CacheStatus, OfflineDatasetCache};
pub use codec::{deserialize_from, load_dataset, save_dataset, serialize_into};
pub use error::{CacheError, DecodeError, EncodeError, ExportError};
pub use json_export::{export_json, json_path};
