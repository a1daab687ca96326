//! Dig plans: move decoding, outline construction, and area.
//!
//! Purpose
//! - Turn the centerline of a one-cell-wide trench into the vertices of its
//!   outer outline, so that a plain shoelace sum yields the lagoon's cell count.
//!
//! Model
//! - Coordinates are `(row, column)` lattice points; `Up` decreases the row.
//! - Each segment is resolved only once the next move is known, since the
//!   outline length of a segment depends on both of its corners.
//!
//! Code cross-refs: `DigPlan`, `decode_line`, `shoelace_area`, `Turn`.

mod area;
mod builder;
mod decode;
mod types;

pub use area::{lattice_cells, shoelace_area, twice_signed_area};
pub use builder::DigPlan;
pub use decode::{decode_line, ParseError};
pub use types::{DecodeMode, Direction, Move, Position, Turn};

#[cfg(test)]
mod tests;
