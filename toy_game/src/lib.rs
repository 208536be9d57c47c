//! Small stochastic agent-vs-adversary games with a fixed state graph.
//!
//! Every game is one [`StochasticGame`] driven by a [`VariantSpec`]: the
//! variants differ only in data (state count, layers, transition tables,
//! rewards), never in code paths.

mod env;
mod error;
mod stochastic_game;
pub mod variant;
mod variants;

pub use env::{one_hot, Env, Step};
pub use error::{EnvError, VariantError};
pub use stochastic_game::StochasticGame;
pub use variant::VariantSpec;
pub use variants::Variant;
