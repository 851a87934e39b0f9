//! CLI subcommand implementations.

pub mod delete;
pub mod end;
pub mod export;
pub mod report;
pub mod start;
pub mod status;
pub mod task;
pub mod util;
