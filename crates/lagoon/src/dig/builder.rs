//! Outline construction from a stream of moves.
//!
//! The trench's outer outline sits half a cell outside the centerline. Along a
//! clockwise loop, a segment's outline grows by half a cell at each convex end
//! and shrinks by half a cell at each concave end. Since the origin is placed
//! on the outline corner just before the first move, the half-cells pair up
//! into whole ones: a segment loses one cell when it starts at a concave
//! corner and gains one when it ends at a convex corner.

use super::area::shoelace_area;
use super::types::{Move, Position, Turn};

/// One-slot lookahead state machine that turns moves into outline vertices.
///
/// Each move is held back until the next one arrives, because its outline
/// length depends on the corner at its far end. The move still pending when
/// input ends is never resolved; for loops that return to the origin the
/// dropped vertex is the origin itself, which contributes nothing to the
/// shoelace sum.
#[derive(Clone, Debug)]
pub struct DigPlan {
    vertices: Vec<Position>,
    pending: Option<Move>,
    /// Corner at the start of the pending move. The loop is assumed to start
    /// right after a clockwise turn, so this begins convex.
    last_turn: Turn,
}

impl Default for DigPlan {
    fn default() -> Self {
        Self {
            vertices: vec![Position::zeros()],
            pending: None,
            last_turn: Turn::Convex,
        }
    }
}

impl DigPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next move; resolves the previously pending one, if any.
    pub fn push(&mut self, mv: Move) {
        let Some(prev) = self.pending.replace(mv) else {
            return;
        };
        let turn = prev.direction.turn_to(mv.direction);
        let mut len = i64::from(prev.distance);
        if self.last_turn == Turn::Concave {
            len -= 1;
        }
        if turn == Turn::Convex {
            len += 1;
        }
        self.last_turn = turn;
        let last = self.last_vertex();
        self.vertices.push(last + prev.direction.delta() * len);
    }

    /// Outline vertices resolved so far, starting at the origin.
    #[inline]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// The move waiting for its successor.
    #[inline]
    pub fn pending(&self) -> Option<Move> {
        self.pending
    }

    /// Number of moves turned into vertices.
    #[inline]
    pub fn resolved(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Lagoon area of the vertices resolved so far.
    pub fn area(&self) -> u128 {
        shoelace_area(&self.vertices)
    }

    /// Finish the plan. The pending move, if any, is discarded unresolved.
    pub fn into_vertices(self) -> Vec<Position> {
        self.vertices
    }

    #[inline]
    fn last_vertex(&self) -> Position {
        // Never empty: starts with the origin and only grows.
        self.vertices[self.vertices.len() - 1]
    }
}

impl Extend<Move> for DigPlan {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

impl FromIterator<Move> for DigPlan {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut plan = DigPlan::new();
        plan.extend(iter);
        plan
    }
}
