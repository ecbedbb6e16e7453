//! CSV and JSON export of experiment results
//!
//! The original plotting output is out of scope here; these files carry the
//! same data in tabular form for downstream analysis.

use std::{fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::experiment::{ExperimentConfig, ExperimentResults, HeuristicSummary};

/// Raw per-trial record, one CSV row
#[derive(Debug, Serialize)]
struct TrialRecord<'a> {
    trial: usize,
    seed: u64,
    heuristic: &'a str,
    solved: bool,
    solution_depth: i32,
    nodes_expanded: usize,
    runtime_s: f64,
}

/// Write every export artifact into `dir`, creating it if needed:
/// `raw_results.csv`, `summary_by_depth.csv`, and `statistics.json`.
///
/// # Errors
///
/// Returns error on any filesystem or serialization failure.
pub fn write_all(results: &ExperimentResults, dir: &Path) -> crate::Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| crate::Error::Io {
        operation: format!("create directory {}", dir.display()),
        source,
    })?;
    write_raw_results(results, dir)?;
    write_depth_table(results, dir)?;
    write_statistics(results, dir)?;
    Ok(())
}

/// One row per (trial, heuristic) pair, in trial order within each heuristic.
pub fn write_raw_results(results: &ExperimentResults, dir: &Path) -> crate::Result<()> {
    let path = dir.join("raw_results.csv");
    let mut writer = csv::Writer::from_writer(BufWriter::new(create(&path)?));
    for run in &results.runs {
        for (trial, result) in run.results.iter().enumerate() {
            writer.serialize(TrialRecord {
                trial,
                seed: results.config.base_seed + trial as u64,
                heuristic: run.kind.label(),
                solved: result.solved,
                solution_depth: result.solution_depth,
                nodes_expanded: result.nodes_expanded,
                runtime_s: result.runtime.as_secs_f64(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Mean nodes expanded and effective branching factor grouped by solution
/// depth and heuristic.
pub fn write_depth_table(results: &ExperimentResults, dir: &Path) -> crate::Result<()> {
    let path = dir.join("summary_by_depth.csv");
    let mut writer = csv::Writer::from_writer(BufWriter::new(create(&path)?));
    for row in results.depth_table() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON document with the batch configuration and per-heuristic aggregates.
pub fn write_statistics(results: &ExperimentResults, dir: &Path) -> crate::Result<()> {
    #[derive(Serialize)]
    struct StatisticsExport<'a> {
        config: &'a ExperimentConfig,
        heuristics: Vec<HeuristicSummary>,
    }

    let path = dir.join("statistics.json");
    let file = create(&path)?;
    serde_json::to_writer_pretty(
        BufWriter::new(file),
        &StatisticsExport {
            config: &results.config,
            heuristics: results.summaries(),
        },
    )?;
    Ok(())
}

fn create(path: &Path) -> crate::Result<File> {
    File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })
}
