//! Command implementations

pub mod benchmark;
pub mod search;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use search::{SearchArgs, SearchRejected, run_search};
pub use simple::{ReplSummary, run_repl, run_simple};
