//! Subcommand implementations

pub mod race;
pub mod strings;
