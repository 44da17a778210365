//! CLI subcommands.

pub mod files;
pub mod lint;
pub mod rules;
