//! Subcommand handlers for the adbar binary.

pub mod config;
pub mod render;
pub mod replay;
mod report;
