use serde::{Deserialize, Serialize};

use crate::models::{BerryFlags, Flavor};

/// Final flavor stats of a blended treat. Every value lies in [0, 99].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorStats {
    pub spicy: u8,
    pub dry: u8,
    pub sweet: u8,
    pub bitter: u8,
    pub sour: u8,
}

impl FlavorStats {
    pub fn from_fn(mut f: impl FnMut(Flavor) -> u8) -> Self {
        Self {
            spicy: f(Flavor::Spicy),
            dry: f(Flavor::Dry),
            sweet: f(Flavor::Sweet),
            bitter: f(Flavor::Bitter),
            sour: f(Flavor::Sour),
        }
    }

    #[inline]
    pub fn get(&self, flavor: Flavor) -> u8 {
        match flavor {
            Flavor::Spicy => self.spicy,
            Flavor::Dry => self.dry,
            Flavor::Sweet => self.sweet,
            Flavor::Bitter => self.bitter,
            Flavor::Sour => self.sour,
        }
    }

    pub fn to_array(&self) -> [u8; 5] {
        Flavor::ALL.map(|flavor| self.get(flavor))
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&v| v as u32).sum()
    }
}

/// Output of a single blend call.
///
/// Serializes as one flat record: the five stats, `feel`, the optional
/// `efficiency`, and whichever of `rpm`/`time` produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendResult {
    #[serde(flatten)]
    pub stats: FlavorStats,

    pub feel: i32,

    /// Percentage of the best achievable stat total (Pokeblock only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,

    #[serde(default)]
    pub flags: BerryFlags,
}

impl BlendResult {
    /// Strongest stat of the treat.
    pub fn level(&self) -> u8 {
        self.stats.to_array().into_iter().max().unwrap_or(0)
    }

    /// Flavor holding the strongest stat; earlier flavors win ties.
    ///
    /// `None` when every stat is zero.
    pub fn dominant_flavor(&self) -> Option<Flavor> {
        let level = self.level();
        if level == 0 {
            return None;
        }
        Flavor::ALL
            .into_iter()
            .find(|&flavor| self.stats.get(flavor) == level)
    }
}
