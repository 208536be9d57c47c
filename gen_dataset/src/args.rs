use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use toy_game::Variant;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Which game to collect trajectories from.
    #[arg(short, long, value_enum, default_value_t = VariantArg::Jackpot)]
    pub variant: VariantArg,

    /// Dataset file. Defaults to offline_data/<variant>.ds
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Collect without reading or writing any dataset file.
    #[arg(long, conflicts_with = "path")]
    pub no_cache: bool,

    /// Maximum number of steps per episode.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub horizon: u64,

    /// Number of environment steps to collect in total.
    #[arg(short, long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub n_interactions: u64,

    /// Seed for both the game and the rollout policy.
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Number of leading trajectories written to the JSON preview.
    #[arg(long, default_value_t = 100)]
    pub json_prefix: usize,

    /// Skip the JSON preview.
    #[arg(long)]
    pub no_json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantArg {
    Jackpot,
    ThreeLayer,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Jackpot => Variant::Jackpot,
            VariantArg::ThreeLayer => Variant::ThreeLayer,
        }
    }
}

impl Args {
    pub fn dataset_path(&self) -> Option<PathBuf> {
        if self.no_cache {
            return None;
        }
        let variant = Variant::from(self.variant);
        Some(self.path.clone().unwrap_or_else(|| {
            PathBuf::from("offline_data").join(format!("{}.ds", variant.name()))
        }))
    }
    pub fn json_prefix(&self) -> Option<usize> {
        (!self.no_json).then_some(self.json_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn default_path_follows_the_variant() {
        let args = Args::parse_from(["gen_dataset", "--variant", "three-layer"]);
        assert_eq!(
            args.dataset_path(),
            Some(PathBuf::from("offline_data/three_layer.ds"))
        );
        assert_eq!(args.horizon, 5);
        assert_eq!(args.n_interactions, 100_000);
        assert_eq!(args.json_prefix(), Some(100));
    }

    #[test]
    fn no_cache_and_no_json_disable_files() {
        let args = Args::parse_from(["gen_dataset", "--no-cache", "--no-json"]);
        assert_eq!(args.dataset_path(), None);
        assert_eq!(args.json_prefix(), None);
    }

    #[test]
    fn zero_horizon_is_refused() {
        assert!(Args::try_parse_from(["gen_dataset", "--horizon", "0"]).is_err());
    }
}
