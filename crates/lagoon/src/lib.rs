//! Lagoon area of a trench dig plan.
//!
//! A dig plan is a closed rectilinear loop of moves. The trench it describes
//! is one cell wide, so the lagoon covers the loop's interior plus the
//! trench cells themselves. The pipeline is strictly forward:
//! decode a line into a `Move`, feed it to a `DigPlan` (which emits corrected
//! outline vertices), then take the shoelace area of those vertices.
//!
//! API Policy
//! - The crate is small and project-internal; `api` is the intended entry
//!   point for callers.

pub mod api;
pub mod dig;
pub mod error;
pub mod rand;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
