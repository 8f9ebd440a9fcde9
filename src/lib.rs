pub mod activity;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod state;

pub use error::{ActivityStatsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GOAL_NOT_MET: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
