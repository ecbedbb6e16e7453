//! Command-line interface for the npuzzle binary

pub mod commands;
