mod args;

use args::Args;
use clap::Parser;
use offline_dataset::{CacheSettings, CacheStatus, OfflineDatasetCache};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sampler::{RandomPolicy, TrajectorySampler};
use std::error::Error;
use std::process::ExitCode;
use toy_game::{StochasticGame, Variant};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "could not acquire dataset");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let variant = Variant::from(args.variant);
    // one seed drives both streams; the game and the policy each get their own
    let mut seeder = ChaCha8Rng::seed_from_u64(args.seed);
    let env = StochasticGame::from_variant(variant, seeder.gen())?;
    let policy = RandomPolicy::seeded(seeder.gen());
    let horizon = usize::try_from(args.horizon)?;
    let n_interactions = usize::try_from(args.n_interactions)?;
    let sampler = TrajectorySampler::new(env, policy, horizon)?;

    let settings = CacheSettings::new(args.dataset_path())
        .with_json_prefix(args.json_prefix())
        .with_description(format!(
            "{} environment trajectories for inspection",
            variant.name()
        ));
    let mut cache = OfflineDatasetCache::new(settings, sampler, n_interactions);
    let acquisition = cache.acquire()?;
    let status = match acquisition.status {
        CacheStatus::Hit => "loaded from cache",
        CacheStatus::Miss => "generated and cached",
        CacheStatus::Disabled => "generated, not cached",
    };
    tracing::info!(
        variant = variant.name(),
        trajectories = acquisition.dataset.len(),
        steps = acquisition.dataset.n_interactions(),
        status,
        "dataset ready"
    );
    Ok(())
}
