mod jackpot;
mod three_layer;

use crate::{VariantError, VariantSpec};

/// The built-in games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Two layers over twelve states, three agent actions, and a rare jackpot
    /// shortcut out of the middle layer.
    Jackpot,
    /// Three layers over ten states with table-driven joint-action rules.
    ThreeLayer,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Jackpot, Variant::ThreeLayer];

    pub fn name(self) -> &'static str {
        match self {
            Self::Jackpot => "jackpot",
            Self::ThreeLayer => "three_layer",
        }
    }
    pub fn spec(self) -> Result<VariantSpec, VariantError> {
        match self {
            Self::Jackpot => jackpot::spec(),
            Self::ThreeLayer => three_layer::spec(),
        }
    }
}
