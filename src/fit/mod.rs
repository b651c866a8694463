pub mod evaluation;
pub mod golden;
pub mod knobs;
pub mod output;
pub mod search;

pub use evaluation::{evaluate_config, hill_climb, FitResult, HillClimbConfig};
pub use golden::{load_golden, GoldenRow};
pub use knobs::KnobRanges;
pub use output::{print_topk, write_best_json, write_csv};
pub use search::{run_fit, FitResults, FitSettings};
