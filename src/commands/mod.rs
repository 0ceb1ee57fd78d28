//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, generate_racks, run_benchmark};
pub use play::{Reply, Session, run_play};
pub use solve::{QueryError, SolveReport, solve_all, solve_input, validate_query};
