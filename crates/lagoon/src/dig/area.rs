//! Shoelace area over outline vertices, and a Pick's-theorem cell count.

use super::types::{Move, Position};

/// Cross product of two lattice points. Coordinates are `i64`, so the
/// products need `i128`.
#[inline]
fn cross(a: Position, b: Position) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
}

/// Twice the signed area of the open vertex chain.
///
/// Sums `x_i * y_{i+1} - x_{i+1} * y_i` over consecutive pairs only; the
/// last-to-first term is not added. Chains starting at the origin lose
/// nothing by this when they end back on it.
pub fn twice_signed_area(vertices: &[Position]) -> i128 {
    vertices.windows(2).map(|w| cross(w[0], w[1])).sum()
}

/// Absolute shoelace area, halved with truncation. Fewer than two vertices give 0.
pub fn shoelace_area(vertices: &[Position]) -> u128 {
    twice_signed_area(vertices).unsigned_abs() / 2
}

/// Cells covered by a closed one-cell-wide trench and its interior.
///
/// Walks the raw centerline from the origin (the closing term back to the
/// origin is zero) and applies Pick's theorem:
/// `cells = interior + boundary = (|2A| + B) / 2 + 1`.
/// Only meaningful for simple loops that return to their start.
pub fn lattice_cells(moves: &[Move]) -> u128 {
    let mut pos = Position::zeros();
    let mut twice_area = 0i128;
    let mut boundary = 0u128;
    for mv in moves {
        let next = pos + mv.direction.delta() * i64::from(mv.distance);
        twice_area += cross(pos, next);
        boundary += u128::from(mv.distance);
        pos = next;
    }
    (twice_area.unsigned_abs() + boundary) / 2 + 1
}
