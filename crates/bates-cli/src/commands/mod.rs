//! Subcommands of the `bates` binary.

pub mod config;
pub mod scan;
