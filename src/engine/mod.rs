pub mod constants;
pub mod normalize;
pub mod poffin;
pub mod pokeblock;

pub use constants::*;
pub use poffin::PoffinParams;
pub use pokeblock::{rpm_bonus_percent, BlenderPreset, PokeblockConfig};

use crate::catalog::BerryCatalog;
use crate::error::Result;
use crate::models::BlendResult;

/// Which minigame to simulate, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlendMode {
    Poffin(PoffinParams),
    Pokeblock { rpm: f64 },
}

impl BlendMode {
    pub fn pokeblock(preset: BlenderPreset) -> Self {
        BlendMode::Pokeblock { rpm: preset.rpm() }
    }
}

/// Resolve `names` against `catalog` and blend them.
///
/// Every name is resolved before any arithmetic runs, so an unknown berry
/// fails the call with `NotFound` and nothing else.
pub fn blend<S: AsRef<str>>(
    catalog: &BerryCatalog,
    names: &[S],
    mode: &BlendMode,
) -> Result<BlendResult> {
    let berries = catalog.resolve(names)?;
    match mode {
        BlendMode::Poffin(params) => poffin::blend(&berries, params),
        BlendMode::Pokeblock { rpm } => pokeblock::blend(&berries, *rpm),
    }
}
