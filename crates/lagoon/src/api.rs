//! Curated surface for the CLI and benchmarks.
//!
//! Prefer these re-exports over reaching into submodules directly.

// Decoding and path construction
pub use crate::dig::{
    decode_line, lattice_cells, shoelace_area, twice_signed_area, DecodeMode, DigPlan, Direction,
    Move, ParseError, Position, Turn,
};
// Orchestration
pub use crate::error::Error;
pub use crate::solve::{solve, solve_lines, solve_reader, Report, ReportSink, SolveCfg};
// Random plans
pub use crate::rand::{draw_skyline, render_plan, BarCount, PlanCfg, ReplayToken, MAX_BARS};
