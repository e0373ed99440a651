//! Command implementations

pub mod check;
pub mod daily;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use daily::{DailyPuzzle, daily_puzzle};
pub use simple::run_simple;
