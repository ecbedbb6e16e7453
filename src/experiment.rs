//! Randomized-trial driver comparing the heuristics across many instances
//!
//! Shuffles the goal board once per trial seed, solves the same instance with
//! every heuristic, and aggregates solution depth, search effort, and
//! effective branching factor the way the reporting layer consumes them.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    heuristics::HeuristicKind,
    metrics::{effective_branching_factor, DEFAULT_TOLERANCE},
    search::{self, SearchResult},
};

/// Configuration for one experiment batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Grid dimension (3 for the 8-puzzle)
    pub n: usize,
    /// Random moves applied to the goal board per trial
    pub shuffle_moves: usize,
    /// Number of puzzle instances
    pub trials: usize,
    /// Trial i shuffles with seed `base_seed + i`
    pub base_seed: u64,
    /// Show a progress bar while trials run
    #[serde(default)]
    pub progress: bool,
}

/// All per-trial results for one heuristic, aligned by trial index
#[derive(Debug, Clone)]
pub struct HeuristicRun {
    pub kind: HeuristicKind,
    pub results: Vec<SearchResult>,
}

/// Results of a full batch, one run per heuristic
#[derive(Debug, Clone)]
pub struct ExperimentResults {
    pub config: ExperimentConfig,
    pub runs: Vec<HeuristicRun>,
}

/// Aggregate statistics for one heuristic over its solved trials
#[derive(Debug, Clone, Serialize)]
pub struct HeuristicSummary {
    pub heuristic: String,
    pub trials: usize,
    pub solved: usize,
    pub success_rate: f64,
    pub solution_depth_mean: f64,
    pub nodes_expanded_mean: f64,
    pub runtime_mean_s: f64,
    pub branching_factor_mean: f64,
}

/// One row of the depth table: mean effort of one heuristic over the trials
/// it solved at a given depth
#[derive(Debug, Clone, Serialize)]
pub struct DepthRow {
    pub solution_depth: i32,
    pub heuristic: String,
    pub samples: usize,
    pub nodes_expanded_mean: f64,
    pub branching_factor_mean: f64,
}

/// Run every heuristic over `config.trials` shuffled instances.
///
/// Each trial shuffles the same goal board with seed `base_seed + i`, so the
/// instances (and therefore the whole batch) are reproducible.
///
/// # Errors
///
/// Returns error if the configured dimension is invalid or the progress bar
/// template fails to parse.
pub fn run_experiments(config: &ExperimentConfig) -> crate::Result<ExperimentResults> {
    let goal = Board::goal(config.n)?;
    let mut runs: Vec<HeuristicRun> = HeuristicKind::ALL
        .iter()
        .map(|&kind| HeuristicRun {
            kind,
            results: Vec::with_capacity(config.trials),
        })
        .collect();

    let bar = if config.progress {
        Some(trial_bar(config.trials)?)
    } else {
        None
    };

    for trial in 0..config.trials {
        let seed = config.base_seed + trial as u64;
        let start = goal.randomize(config.shuffle_moves, seed);
        for run in &mut runs {
            let kind = run.kind;
            run.results.push(search::astar(&start, |b| kind.evaluate(b)));
        }
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish();
    }

    Ok(ExperimentResults {
        config: config.clone(),
        runs,
    })
}

fn trial_bar(trials: usize) -> crate::Result<ProgressBar> {
    let bar = ProgressBar::new(trials as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );
    Ok(bar)
}

impl ExperimentResults {
    /// Per-heuristic aggregates over solved trials, in [`HeuristicKind::ALL`]
    /// order.
    pub fn summaries(&self) -> Vec<HeuristicSummary> {
        self.runs
            .iter()
            .map(|run| {
                let solved: Vec<&SearchResult> =
                    run.results.iter().filter(|r| r.solved).collect();
                let trials = run.results.len();
                HeuristicSummary {
                    heuristic: run.kind.label().to_string(),
                    trials,
                    solved: solved.len(),
                    success_rate: if trials == 0 {
                        0.0
                    } else {
                        solved.len() as f64 / trials as f64
                    },
                    solution_depth_mean: mean(solved.iter().map(|r| r.solution_depth as f64)),
                    nodes_expanded_mean: mean(solved.iter().map(|r| r.nodes_expanded as f64)),
                    runtime_mean_s: mean(solved.iter().map(|r| r.runtime.as_secs_f64())),
                    branching_factor_mean: mean(solved.iter().map(|r| {
                        effective_branching_factor(
                            r.nodes_expanded,
                            r.solution_depth,
                            DEFAULT_TOLERANCE,
                        )
                    })),
                }
            })
            .collect()
    }

    /// Long-format depth table: one row per (solution depth, heuristic)
    /// group with at least one solved trial, ordered by depth then by
    /// heuristic strength.
    pub fn depth_table(&self) -> Vec<DepthRow> {
        let mut depths = std::collections::BTreeSet::new();
        for run in &self.runs {
            for result in &run.results {
                if result.solved {
                    depths.insert(result.solution_depth);
                }
            }
        }

        let mut rows = Vec::new();
        for &depth in &depths {
            for run in &self.runs {
                let group: Vec<&SearchResult> = run
                    .results
                    .iter()
                    .filter(|r| r.solved && r.solution_depth == depth)
                    .collect();
                if group.is_empty() {
                    continue;
                }
                rows.push(DepthRow {
                    solution_depth: depth,
                    heuristic: run.kind.label().to_string(),
                    samples: group.len(),
                    nodes_expanded_mean: mean(group.iter().map(|r| r.nodes_expanded as f64)),
                    branching_factor_mean: mean(group.iter().map(|r| {
                        effective_branching_factor(
                            r.nodes_expanded,
                            r.solution_depth,
                            DEFAULT_TOLERANCE,
                        )
                    })),
                });
            }
        }
        rows
    }
}

/// Arithmetic mean, 0.0 over an empty iterator.
fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
