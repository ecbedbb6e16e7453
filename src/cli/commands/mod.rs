//! CLI subcommand implementations

pub mod experiment;
pub mod play;
pub mod solve;
