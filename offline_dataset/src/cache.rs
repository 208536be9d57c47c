use super::codec::{load_dataset, save_dataset};
use super::json_export::export_json;
use super::CacheError;
use sampler::{RolloutPolicy, TrajectorySampler};
use std::path::{Path, PathBuf};
use toy_game::Env;
use trajectory_data::Dataset;

const DEFAULT_JSON_PREFIX: usize = 100;
const DEFAULT_DESCRIPTION: &str = "Toy variant environment trajectories for inspection";

pub struct CacheSettings {
    /// Without a path nothing is persisted and every acquisition collects.
    pub path: Option<PathBuf>,
    /// How many leading trajectories go into the JSON inspection file;
    /// `None` skips the file.
    pub json_prefix: Option<usize>,
    pub description: String,
}

impl CacheSettings {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            json_prefix: Some(DEFAULT_JSON_PREFIX),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
    pub fn with_json_prefix(mut self, json_prefix: Option<usize>) -> Self {
        self.json_prefix = json_prefix;
        self
    }
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    /// Loaded from an existing file.
    Hit,
    /// Collected and written to the cache path.
    Miss,
    /// Collected; no cache path configured.
    Disabled,
}

#[derive(Debug)]
pub struct Acquisition {
    pub status: CacheStatus,
    pub dataset: Dataset,
}

/// Hands out the dataset stored at the cache path, collecting and storing it
/// first when the file does not exist yet.
///
/// The file is trusted as is: it is never checked against the sampler's
/// environment, policy, horizon or interaction count.
pub struct OfflineDatasetCache<E, P> {
    settings: CacheSettings,
    sampler: TrajectorySampler<E, P>,
    n_interactions: usize,
}

impl<E, P> OfflineDatasetCache<E, P>
where
    E: Env,
    P: RolloutPolicy,
{
    pub fn new(
        settings: CacheSettings,
        sampler: TrajectorySampler<E, P>,
        n_interactions: usize,
    ) -> Self {
        Self {
            settings,
            sampler,
            n_interactions,
        }
    }
    pub fn acquire(&mut self) -> Result<Acquisition, CacheError> {
        let Some(path) = self.settings.path.clone() else {
            tracing::info!("no dataset path configured, generating trajectories");
            let dataset = self.collect()?;
            return Ok(Acquisition {
                status: CacheStatus::Disabled,
                dataset,
            });
        };
        if path.exists() {
            tracing::info!(path = %path.display(), "dataset file found, loading existing trajectories");
            let dataset = load_dataset(&path)
                .map_err(|source| CacheError::Deserialization { path, source })?;
            tracing::info!(trajectories = dataset.len(), "loaded dataset");
            return Ok(Acquisition {
                status: CacheStatus::Hit,
                dataset,
            });
        }
        tracing::info!(path = %path.display(), "dataset file not found, generating trajectories");
        let dataset = self.collect()?;
        save_dataset(&path, &dataset).map_err(|source| CacheError::CachePath {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), trajectories = dataset.len(), "saved dataset");
        self.export_json(&path, &dataset);
        Ok(Acquisition {
            status: CacheStatus::Miss,
            dataset,
        })
    }
    fn collect(&mut self) -> Result<Dataset, CacheError> {
        let trajectories = self.sampler.collect_trajectories(self.n_interactions)?;
        Ok(Dataset::new(trajectories))
    }
    // the inspection file is a convenience; failing to write it must not
    // fail the acquisition
    fn export_json(&self, path: &Path, dataset: &Dataset) {
        let Some(max_trajectories) = self.settings.json_prefix else {
            return;
        };
        match export_json(path, dataset, max_trajectories, &self.settings.description) {
            Ok(json_path) => {
                tracing::info!(path = %json_path.display(), "saved trajectory preview")
            }
            Err(e) => tracing::warn!(error = %e, "could not write trajectory preview"),
        }
    }
}
