use std::collections::BTreeMap;
use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use berry_blend::catalog::{load_catalog, load_recipes, recipe_name, save_results, BerryCatalog};
use berry_blend::cli::{Cli, Command};
use berry_blend::engine::{self, BlendMode};
use berry_blend::error::{BlendError, Result};
use berry_blend::interface::{display_blend_result, display_catalog};

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let catalog = open_catalog(&cli.catalog)?;

    match command {
        Command::Berries => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Poffin { berries, cook } => cmd_blend(&catalog, &berries, &cook.mode()),
        Command::Pokeblock { berries, machine } => {
            cmd_blend(&catalog, &berries, &machine.mode())
        }
        Command::Batch {
            recipes,
            out,
            poffin,
            cook,
            machine,
        } => {
            let mode = if poffin { cook.mode() } else { machine.mode() };
            cmd_batch(&catalog, &recipes, &out, &mode)
        }
    }
}

fn open_catalog(path: &Path) -> Result<BerryCatalog> {
    let berries = load_catalog(path)?;
    let catalog = BerryCatalog::new(berries);
    info!("Loaded {} berries from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Append a "did you mean" hint to unknown-berry errors.
fn with_suggestion(catalog: &BerryCatalog, err: BlendError) -> BlendError {
    match err {
        BlendError::NotFound(name) => match catalog.suggest(&name) {
            Some(hint) => BlendError::NotFound(format!("{} (did you mean '{}'?)", name, hint)),
            None => BlendError::NotFound(name),
        },
        other => other,
    }
}

/// Blend a single recipe and print it.
fn cmd_blend(catalog: &BerryCatalog, berries: &[String], mode: &BlendMode) -> Result<()> {
    let result =
        engine::blend(catalog, berries, mode).map_err(|e| with_suggestion(catalog, e))?;
    display_blend_result(&recipe_name(berries), &result);
    Ok(())
}

/// Blend every recipe in a CSV, skipping the ones that fail.
fn cmd_batch(catalog: &BerryCatalog, recipes: &Path, out: &Path, mode: &BlendMode) -> Result<()> {
    let recipes = load_recipes(recipes)?;
    info!("Blending {} recipes", recipes.len());

    let mut results = BTreeMap::new();
    let mut skipped = 0;

    for names in &recipes {
        let name = recipe_name(names);
        match engine::blend(catalog, names, mode) {
            Ok(result) => {
                results.insert(name, result);
            }
            Err(e) => {
                skipped += 1;
                warn!("Skipping recipe {}: {}", name, with_suggestion(catalog, e));
            }
        }
    }

    save_results(out, &results)?;
    info!(
        "Wrote {} results to {} ({} skipped)",
        results.len(),
        out.display(),
        skipped
    );
    Ok(())
}
