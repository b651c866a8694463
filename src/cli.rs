use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::engine::{BlendMode, BlenderPreset, PoffinParams, DEFAULT_MISTAKES};

/// Pokeblock and Poffin blending calculator.
#[derive(Parser, Debug)]
#[command(name = "berry_blend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the berry catalog (JSON, or TSV when the extension is .tsv).
    #[arg(short, long, default_value = "berries.json", global = true)]
    pub catalog: PathBuf,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List every berry in the catalog.
    #[default]
    Berries,

    /// Cook a Poffin.
    Poffin {
        /// Berry names, in the order they go into the pot.
        #[arg(required = true)]
        berries: Vec<String>,

        #[command(flatten)]
        cook: CookArgs,
    },

    /// Blend a Pokeblock.
    Pokeblock {
        /// Berry names, in the order they drop into the blender.
        #[arg(required = true)]
        berries: Vec<String>,

        #[command(flatten)]
        machine: MachineArgs,
    },

    /// Blend every recipe in a CSV and write the results as JSON.
    Batch {
        /// CSV with a `berries` column of space-separated names.
        #[arg(long)]
        recipes: PathBuf,

        /// Output JSON file, keyed by recipe name.
        #[arg(long, default_value = "blend_results.json")]
        out: PathBuf,

        /// Cook Poffins instead of blending Pokeblocks.
        #[arg(long)]
        poffin: bool,

        #[command(flatten)]
        cook: CookArgs,

        #[command(flatten)]
        machine: MachineArgs,
    },
}

/// Poffin stirring parameters.
#[derive(Args, Debug, Clone)]
pub struct CookArgs {
    /// Seconds spent stirring.
    #[arg(long, default_value_t = 60.0)]
    pub time: f64,

    /// Stirring mistakes.
    #[arg(long, default_value_t = DEFAULT_MISTAKES)]
    pub mistakes: u32,
}

impl CookArgs {
    pub fn mode(&self) -> BlendMode {
        BlendMode::Poffin(PoffinParams {
            time: self.time,
            mistakes: self.mistakes,
        })
    }
}

/// Blender speed: an explicit RPM or one of the canonical presets.
#[derive(Args, Debug, Clone)]
pub struct MachineArgs {
    /// Exact RPM; overrides --preset.
    #[arg(long)]
    pub rpm: Option<f64>,

    /// Canonical blender speed.
    #[arg(long, value_enum, default_value_t = PresetArg::Player)]
    pub preset: PresetArg,
}

impl MachineArgs {
    pub fn rpm(&self) -> f64 {
        self.rpm
            .unwrap_or_else(|| BlenderPreset::from(self.preset).rpm())
    }

    pub fn mode(&self) -> BlendMode {
        BlendMode::Pokeblock { rpm: self.rpm() }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetArg {
    /// 89.91 RPM
    Player,
    /// 96.57 RPM
    Npc,
    /// 150.00 RPM
    BlendMaster,
}

impl From<PresetArg> for BlenderPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Player => BlenderPreset::Player,
            PresetArg::Npc => BlenderPreset::Npc,
            PresetArg::BlendMaster => BlenderPreset::BlendMaster,
        }
    }
}
