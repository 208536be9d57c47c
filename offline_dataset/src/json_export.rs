use super::ExportError;
use file_io::StagedFile;
use serde::Serialize;
use std::path::{Path, PathBuf};
use trajectory_data::{Dataset, Observation, PolicyInfo, StepInfo, Trajectory};

#[derive(Serialize)]
struct Export<'a> {
    metadata: Metadata<'a>,
    trajectories: Vec<ExportedTrajectory<'a>>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    total_trajectories: usize,
    saved_trajectories: usize,
    description: &'a str,
}

#[derive(Serialize)]
struct ExportedTrajectory<'a> {
    trajectory_id: usize,
    length: usize,
    observations: &'a [Observation],
    actions: &'a [u8],
    rewards: &'a [f64],
    infos: &'a [StepInfo],
    policy_infos: &'a [PolicyInfo],
}

impl<'a> ExportedTrajectory<'a> {
    fn new(trajectory_id: usize, trajectory: &'a Trajectory) -> Self {
        Self {
            trajectory_id,
            length: trajectory.len(),
            observations: trajectory.observations(),
            actions: trajectory.actions(),
            rewards: trajectory.rewards(),
            infos: trajectory.infos(),
            policy_infos: trajectory.policy_infos(),
        }
    }
}

/// The inspection file that accompanies the dataset at `dataset_path`.
pub fn json_path<P: AsRef<Path>>(dataset_path: P) -> PathBuf {
    dataset_path.as_ref().with_extension("json")
}

/// Writes the first `max_trajectories` trajectories as pretty-printed JSON
/// next to the dataset file. Meant for eyeballing, not for reloading.
pub fn export_json<P: AsRef<Path>>(
    dataset_path: P,
    dataset: &Dataset,
    max_trajectories: usize,
    description: &str,
) -> Result<PathBuf, ExportError> {
    let dataset_path = dataset_path.as_ref();
    let path = json_path(dataset_path);
    if path == dataset_path {
        return Err(ExportError::PathCollision(path));
    }
    let saved = &dataset.trajectories()[..dataset.len().min(max_trajectories)];
    let export = Export {
        metadata: Metadata {
            total_trajectories: dataset.len(),
            saved_trajectories: saved.len(),
            description,
        },
        trajectories: saved
            .iter()
            .enumerate()
            .map(|(id, trajectory)| ExportedTrajectory::new(id, trajectory))
            .collect(),
    };
    let mut file = StagedFile::create(&path)?;
    serde_json::to_writer_pretty(&mut file, &export)?;
    file.commit()?;
    Ok(path)
}
