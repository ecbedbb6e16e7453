//! npuzzle CLI - optimal n-puzzle solving and heuristic comparison
//!
//! This CLI provides a unified interface for:
//! - Solving single instances and inspecting the solution path
//! - Running randomized experiment batches across all heuristics
//! - Playing the puzzle interactively

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(version, about = "Optimal n-puzzle solving with A*", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single puzzle instance with A*
    Solve(npuzzle::cli::commands::solve::SolveArgs),

    /// Run randomized trials comparing the heuristics
    Experiment(npuzzle::cli::commands::experiment::ExperimentArgs),

    /// Play the puzzle interactively
    Play(npuzzle::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => npuzzle::cli::commands::solve::execute(args),
        Commands::Experiment(args) => npuzzle::cli::commands::experiment::execute(args),
        Commands::Play(args) => npuzzle::cli::commands::play::execute(args),
    }
}
