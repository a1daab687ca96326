//! Random closed dig plans ("skylines") with replay tokens.
//!
//! Model
//! - A row of bars standing on a common baseline, each with a random width and
//!   a random height different from its left neighbour.
//! - The loop runs clockwise: up the left side, across the bar tops (stepping
//!   up or down between bars), down the right side, and back along the
//!   baseline. It starts right after the convex corner at the origin and never
//!   repeats a direction, which is what `DigPlan` assumes.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dig::{Direction, Move};

/// Upper bound on bars per plan. With widths capped at
/// `Move::MAX_HEX_DISTANCE`, the baseline leg still fits a `u32`.
pub const MAX_BARS: usize = 4096;

/// Bar count distribution.
#[derive(Clone, Copy, Debug)]
pub enum BarCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl BarCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            BarCount::Fixed(n) => n.clamp(1, MAX_BARS),
            BarCount::Uniform { min, max } => {
                let lo = min.clamp(1, MAX_BARS);
                let hi = max.clamp(lo, MAX_BARS);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Skyline sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlanCfg {
    /// Clamped to `1..=MAX_BARS`.
    pub bars: BarCount,
    /// Bar widths are drawn from `1..=max_width`, capped at `Move::MAX_HEX_DISTANCE`.
    pub max_width: u32,
    /// Bar heights are drawn from `1..=max_height`, kept within
    /// `2..=Move::MAX_HEX_DISTANCE` so that neighbouring bars can always differ.
    pub max_height: u32,
}
impl Default for PlanCfg {
    fn default() -> Self {
        Self {
            bars: BarCount::Uniform { min: 1, max: 16 },
            max_width: 12,
            max_height: 12,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random clockwise skyline loop that closes at the origin.
pub fn draw_skyline(cfg: PlanCfg, tok: ReplayToken) -> Vec<Move> {
    let mut rng = tok.to_std_rng();
    let n = cfg.bars.sample(&mut rng);
    let max_w = cfg.max_width.clamp(1, Move::MAX_HEX_DISTANCE);
    let max_h = cfg.max_height.clamp(2, Move::MAX_HEX_DISTANCE);

    let mut moves = Vec::with_capacity(2 * n + 2);
    let mut height = 0u32;
    let mut total_width = 0u32;
    for _ in 0..n {
        let next = if height == 0 {
            rng.gen_range(1..=max_h)
        } else {
            // Uniform over 1..=max_h without `height`.
            let h = rng.gen_range(1..max_h);
            if h >= height {
                h + 1
            } else {
                h
            }
        };
        let step = if next > height {
            Move::new(Direction::Up, next - height)
        } else {
            Move::new(Direction::Down, height - next)
        };
        moves.push(step);
        let width = rng.gen_range(1..=max_w);
        moves.push(Move::new(Direction::Right, width));
        height = next;
        total_width += width;
    }
    moves.push(Move::new(Direction::Down, height));
    moves.push(Move::new(Direction::Left, total_width));
    moves
}

/// Render a plan in the input format, one move per line.
pub fn render_plan(moves: &[Move]) -> String {
    let mut out = String::new();
    for mv in moves {
        out.push_str(&mv.render());
        out.push('\n');
    }
    out
}
