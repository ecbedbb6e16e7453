//! Solve command - run A* on a single puzzle instance

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Board,
    heuristics::HeuristicKind,
    metrics::{effective_branching_factor, DEFAULT_TOLERANCE},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a single puzzle instance with A*")]
pub struct SolveArgs {
    /// Grid dimension (3 = 8-puzzle, 4 = 15-puzzle)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub n: usize,

    /// Shuffle the goal board with this many random moves
    #[arg(long, short = 'k', default_value_t = 20)]
    pub shuffle: usize,

    /// Seed for the shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Explicit start position as a comma-separated row-major tile list
    /// with 0 for the blank (overrides --n/--shuffle/--seed)
    #[arg(long)]
    pub tiles: Option<String>,

    /// Heuristic guiding the search
    #[arg(long, value_enum, default_value = "manhattan")]
    pub heuristic: HeuristicKind,

    /// Print every board along the solution path
    #[arg(long)]
    pub show_path: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let start = match &args.tiles {
        Some(list) => parse_tiles_board(list)?,
        None => Board::goal(args.n)?.randomize(args.shuffle, args.seed),
    };

    println!("Start position:\n{start}\n");
    if !start.is_solvable() {
        println!("Note: this position is unsolvable; A* will exhaust the reachable states.\n");
    }

    let heuristic = args.heuristic;
    let result = search::astar(&start, |b| heuristic.evaluate(b));

    println!("=== Search Result ===");
    println!("Heuristic: {heuristic}");
    println!("Solved: {}", result.solved);
    if result.solved {
        println!("Solution depth: {}", result.solution_depth);
    }
    println!("Nodes expanded: {}", result.nodes_expanded);
    println!("Runtime: {:.4}s", result.runtime.as_secs_f64());
    if result.solved {
        let b_star =
            effective_branching_factor(result.nodes_expanded, result.solution_depth, DEFAULT_TOLERANCE);
        println!("Effective branching factor: {b_star:.3}");
    }

    if args.show_path {
        if let Some(path) = &result.path {
            for (step, board) in path.iter().enumerate() {
                println!("\nStep {step}:\n{board}");
            }
        }
    }

    Ok(())
}

/// Parse "1,2,3,…" into a board, inferring the dimension from the length.
fn parse_tiles_board(input: &str) -> crate::Result<Board> {
    let values = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u16>()
                .map_err(|e| crate::Error::ParseTiles {
                    input: input.to_string(),
                    reason: format!("'{}': {e}", part.trim()),
                })
        })
        .collect::<crate::Result<Vec<u16>>>()?;

    let n = values.len().isqrt();
    if n * n != values.len() {
        return Err(crate::Error::ParseTiles {
            input: input.to_string(),
            reason: format!("{} tiles is not a square board", values.len()),
        });
    }
    Board::from_flat(n, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiles_board() {
        let board = parse_tiles_board("1,2,3,4,5,6,7,8,0").unwrap();
        assert!(board.is_goal());

        assert!(parse_tiles_board("1,2,3").is_err());
        assert!(parse_tiles_board("1,2,x,4").is_err());
    }
}
