use std::fmt;

use serde::{Deserialize, Serialize};

/// The five contest flavors, in the order the blender dials show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Spicy,
    Dry,
    Sweet,
    Bitter,
    Sour,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Flavor::Spicy,
        Flavor::Dry,
        Flavor::Sweet,
        Flavor::Bitter,
        Flavor::Sour,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Flavor::Spicy => "spicy",
            Flavor::Dry => "dry",
            Flavor::Sweet => "sweet",
            Flavor::Bitter => "bitter",
            Flavor::Sour => "sour",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed flavor levels of a berry or of a running blend.
///
/// A negative level is an anti-flavor: it cancels the same axis contributed
/// by other berries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorLevels {
    #[serde(default)]
    pub spicy: i32,
    #[serde(default)]
    pub dry: i32,
    #[serde(default)]
    pub sweet: i32,
    #[serde(default)]
    pub bitter: i32,
    #[serde(default)]
    pub sour: i32,
}

impl FlavorLevels {
    pub fn from_fn(mut f: impl FnMut(Flavor) -> i32) -> Self {
        Self {
            spicy: f(Flavor::Spicy),
            dry: f(Flavor::Dry),
            sweet: f(Flavor::Sweet),
            bitter: f(Flavor::Bitter),
            sour: f(Flavor::Sour),
        }
    }

    #[inline]
    pub fn get(&self, flavor: Flavor) -> i32 {
        match flavor {
            Flavor::Spicy => self.spicy,
            Flavor::Dry => self.dry,
            Flavor::Sweet => self.sweet,
            Flavor::Bitter => self.bitter,
            Flavor::Sour => self.sour,
        }
    }

    /// Levels in `Flavor::ALL` order.
    pub fn to_array(&self) -> [i32; 5] {
        Flavor::ALL.map(|flavor| self.get(flavor))
    }
}

/// Availability and side-effect flags carried by a berry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlags {
    /// Only obtainable through distribution events.
    #[serde(default)]
    pub event: bool,
    /// Rarely held by wild or trainer Pokemon in battle.
    #[serde(default)]
    pub battle_rare: bool,
    /// Only obtainable from the Battle Frontier.
    #[serde(default)]
    pub frontier: bool,
    /// Hurts the holder when it over-ripens.
    #[serde(default)]
    pub damage: bool,
}

impl BerryFlags {
    /// Logical OR of both flag sets.
    pub fn union(self, other: BerryFlags) -> BerryFlags {
        BerryFlags {
            event: self.event || other.event,
            battle_rare: self.battle_rare || other.battle_rare,
            frontier: self.frontier || other.frontier,
            damage: self.damage || other.damage,
        }
    }

    /// True when the berry can be obtained in ordinary play.
    pub fn is_standard(&self) -> bool {
        !self.event && !self.frontier
    }
}

/// A catalog berry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Berry {
    pub name: String,

    #[serde(flatten)]
    pub flavors: FlavorLevels,

    #[serde(default)]
    pub smoothness: u32,

    #[serde(default)]
    pub flags: BerryFlags,
}

impl Berry {
    pub fn new(name: impl Into<String>, flavors: FlavorLevels, smoothness: u32) -> Self {
        Self {
            name: name.into(),
            flavors,
            smoothness,
            flags: BerryFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: BerryFlags) -> Self {
        self.flags = flags;
        self
    }
}
