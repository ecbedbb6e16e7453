//! Optimal n-puzzle solving with A* best-first search
//!
//! This crate provides:
//! - Immutable sliding-tile board representation with validated construction
//! - Three admissible heuristics: misplaced tiles, Manhattan distance, and
//!   Manhattan plus linear conflicts
//! - An A* engine reporting solution depth, search effort, and the solution
//!   path
//! - An experiment driver with statistics aggregation and CSV/JSON export

pub mod board;
pub mod cli;
pub mod error;
pub mod experiment;
pub mod export;
pub mod heuristics;
pub mod metrics;
pub mod play;
pub mod search;

pub use board::{Board, Direction, Neighbors};
pub use error::{Error, Result};
pub use heuristics::HeuristicKind;
pub use search::{astar, SearchResult};
