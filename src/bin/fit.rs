use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use berry_blend::catalog::{load_catalog, BerryCatalog};
use berry_blend::fit::{
    load_golden, print_topk, run_fit, write_best_json, write_csv, FitSettings, HillClimbConfig,
    KnobRanges,
};

#[derive(Parser, Debug)]
#[command(name = "fit")]
#[command(about = "Fit Pokeblock machine constants to a golden fixture")]
struct Args {
    /// Berry catalog (JSON, or TSV when the extension is .tsv)
    #[arg(long, default_value = "berries.json")]
    catalog: PathBuf,

    /// Golden fixture CSV (berries,rpm,spicy,dry,sweet,bitter,sour)
    #[arg(long, default_value = "pokeblock_golden.csv")]
    golden: PathBuf,

    /// Number of random search iterations
    #[arg(long, default_value = "300")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Output CSV file for all results
    #[arg(long, default_value = "fit_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the best result
    #[arg(long, default_value = "fit_best.json")]
    json: PathBuf,

    /// Number of top results to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Disable hill climbing refinement
    #[arg(long)]
    no_hill_climb: bool,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let berries = match load_catalog(&args.catalog) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error loading catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };
    let catalog = BerryCatalog::new(berries);

    let rows = match load_golden(&args.golden) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading golden fixture {:?}: {}", args.golden, e);
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        eprintln!("Error: golden fixture {:?} has no rows", args.golden);
        std::process::exit(1);
    }
    println!(
        "Loaded {} berries and {} golden rows",
        catalog.len(),
        rows.len()
    );

    let settings = FitSettings {
        iterations: args.iters,
        seed: args.seed,
        ranges: KnobRanges::default(),
        hill_climb: if args.no_hill_climb {
            None
        } else {
            Some(HillClimbConfig::default())
        },
    };

    let fit = run_fit(&settings, &catalog, &rows);
    print_topk(&fit.results, args.topk);

    let best = fit.best();
    let baseline = &fit.baseline;
    println!("=== Best vs Baseline ===");
    println!(
        "Baseline: exact={}/{} error={}",
        baseline.exact_matches, baseline.rows, baseline.total_error
    );
    println!(
        "Best:     exact={}/{} error={}",
        best.exact_matches, best.rows, best.total_error
    );
    println!();

    if let Err(e) = write_csv(&fit.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, baseline, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote best result to {:?}", args.json);
    }
}
