//! Experiment command - randomized trials across all heuristics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    experiment::{run_experiments, ExperimentConfig},
    export,
};

#[derive(Parser, Debug)]
#[command(about = "Run randomized solving trials for every heuristic")]
pub struct ExperimentArgs {
    /// Grid dimension (3 = 8-puzzle, 4 = 15-puzzle)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub n: usize,

    /// Random moves per shuffled instance
    #[arg(long, short = 'k', default_value_t = 20)]
    pub shuffle: usize,

    /// Number of puzzle instances
    #[arg(long, short = 't', default_value_t = 100)]
    pub trials: usize,

    /// Seed of the first trial (trial i uses seed + i)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Directory for CSV/JSON export
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: ExperimentArgs) -> Result<()> {
    let config = ExperimentConfig {
        n: args.n,
        shuffle_moves: args.shuffle,
        trials: args.trials,
        base_seed: args.seed,
        progress: true,
    };

    println!(
        "=== {0}x{0} puzzle: {1} trials, {2} shuffle moves ===",
        config.n, config.trials, config.shuffle_moves
    );
    let results = run_experiments(&config)?;

    println!("\n=== Statistics over solved trials ===");
    for summary in results.summaries() {
        println!(
            "{:<20} solved {:>4}/{:<4} depth {:6.2}  nodes {:10.1}  runtime {:.4}s  b* {:.3}",
            summary.heuristic,
            summary.solved,
            summary.trials,
            summary.solution_depth_mean,
            summary.nodes_expanded_mean,
            summary.runtime_mean_s,
            summary.branching_factor_mean,
        );
    }

    println!("\n=== Mean nodes and b* by solution depth ===");
    for row in results.depth_table() {
        println!(
            "d={:<3} {:<20} samples {:>4}  nodes {:10.1}  b* {:.2}",
            row.solution_depth,
            row.heuristic,
            row.samples,
            row.nodes_expanded_mean,
            row.branching_factor_mean,
        );
    }

    if let Some(dir) = &args.out {
        export::write_all(&results, dir)?;
        println!("\nResults exported to: {}", dir.display());
    }

    Ok(())
}
