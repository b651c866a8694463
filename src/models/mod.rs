mod berry;
mod blend;

pub use berry::{Berry, BerryFlags, Flavor, FlavorLevels};
pub use blend::{BlendResult, FlavorStats};
