use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::fit::evaluation::FitResult;
use crate::fit::knobs::describe;

/// Truncate a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all results to a CSV file, best first.
pub fn write_csv(results: &[FitResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "centi_rpm_per_point",
        "crossing_penalty",
        "exact_matches",
        "rows",
        "match_rate",
        "total_error",
        "unresolved",
    ])?;

    for (i, result) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            result.config.centi_rpm_per_point.to_string(),
            result.config.crossing_penalty.to_string(),
            result.exact_matches.to_string(),
            result.rows.to_string(),
            format!("{:.4}", result.match_rate()),
            result.total_error.to_string(),
            result.unresolved.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the best result, alongside the baseline, to a JSON file.
pub fn write_best_json(best: &FitResult, baseline: &FitResult, path: &Path) -> Result<()> {
    let metrics = |r: &FitResult| {
        serde_json::json!({
            "exact_matches": r.exact_matches,
            "rows": r.rows,
            "match_rate": truncate(r.match_rate(), 4),
            "total_error": r.total_error,
            "unresolved": r.unresolved,
        })
    };

    let json = serde_json::json!({
        "config": best.config,
        "metrics": metrics(best),
        "baseline": {
            "config": baseline.config,
            "metrics": metrics(baseline),
        },
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print top-k results to stdout.
pub fn print_topk(results: &[FitResult], k: usize) {
    println!("\n=== Top {} Results ===\n", k.min(results.len()));

    for (i, result) in results.iter().take(k).enumerate() {
        println!(
            "#{}: exact={}/{} ({:.1}%) error={} unresolved={}",
            i + 1,
            result.exact_matches,
            result.rows,
            result.match_rate() * 100.0,
            result.total_error,
            result.unresolved
        );
        println!("    {}", describe(&result.config));
        println!();
    }
}
