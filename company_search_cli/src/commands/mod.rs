//! CLI subcommand implementations.

pub mod list;
pub mod search;
pub mod suggest;
pub mod validate;
