//! Play command - interactive text-mode puzzle

use anyhow::Result;
use clap::Parser;

use crate::{board::Board, play};

#[derive(Parser, Debug)]
#[command(about = "Play the puzzle interactively")]
pub struct PlayArgs {
    /// Grid dimension (3 = 8-puzzle, 4 = 15-puzzle)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub n: usize,

    /// Random moves applied before play starts (and on reshuffle)
    #[arg(long, short = 'k', default_value_t = 10)]
    pub shuffle: usize,

    /// Shuffle seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let board = Board::goal(args.n)?.randomize(args.shuffle, seed);
    play::run(board, args.shuffle)?;
    Ok(())
}
