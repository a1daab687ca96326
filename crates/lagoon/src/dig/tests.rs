use super::*;
use crate::rand::{draw_skyline, BarCount, PlanCfg, ReplayToken};
use proptest::prelude::*;

const SAMPLE: &str = include_str!("../../data/sample.txt");

fn plan_from(text: &str, mode: DecodeMode) -> DigPlan {
    text.lines()
        .map(|line| decode_line(line, mode).unwrap())
        .collect()
}

fn square(side: u32) -> Vec<Move> {
    vec![
        Move::new(Direction::Right, side),
        Move::new(Direction::Down, side),
        Move::new(Direction::Left, side),
        Move::new(Direction::Up, side),
    ]
}

#[test]
fn sample_primary_area() {
    let plan = plan_from(SAMPLE, DecodeMode::Primary);
    assert_eq!(plan.area(), 62);
}

#[test]
fn sample_alternate_area() {
    let plan = plan_from(SAMPLE, DecodeMode::Alternate);
    assert_eq!(plan.area(), 952_408_144_115);
}

#[test]
fn sample_outline_vertices() {
    let plan = plan_from(SAMPLE, DecodeMode::Primary);
    let expected: Vec<Position> = [
        (0, 0),
        (0, 7),
        (6, 7),
        (6, 5),
        (7, 5),
        (7, 7),
        (10, 7),
        (10, 1),
        (8, 1),
        (8, 0),
        (5, 0),
        (5, 2),
        (3, 2),
        (3, 0),
    ]
    .into_iter()
    .map(|(r, c)| Position::new(r, c))
    .collect();
    assert_eq!(plan.vertices(), expected.as_slice());
    assert_eq!(plan.pending(), Some(Move::new(Direction::Up, 2)));
}

#[test]
fn square_counts_trench_cells() {
    let plan: DigPlan = square(4).into_iter().collect();
    assert_eq!(
        plan.vertices(),
        &[
            Position::new(0, 0),
            Position::new(0, 5),
            Position::new(5, 5),
            Position::new(5, 0)
        ]
    );
    // 5x5 cells: 4x4 centerline plus half the trench on every side.
    assert_eq!(plan.area(), 25);
    assert_eq!(lattice_cells(&square(4)), 25);
}

#[test]
fn wide_square_area_does_not_overflow() {
    // Literal distances near the top of the u32 range; cross products exceed i64.
    let side: u32 = 3_100_000_000;
    let text: String = square(side)
        .iter()
        .map(|mv| format!("{}\n", mv.render()))
        .collect();
    let plan = plan_from(&text, DecodeMode::Primary);
    let expected = u128::from(side + 1) * u128::from(side + 1);
    assert_eq!(plan.area(), 9_610_000_006_200_000_001);
    assert_eq!(plan.area(), expected);
    assert_eq!(lattice_cells(&square(side)), expected);
    assert_eq!(lattice_cells(&square(u32::MAX)), 1u128 << 64);
}

#[test]
fn single_move_has_no_area() {
    let mut plan = DigPlan::new();
    plan.push(Move::new(Direction::Right, 9));
    assert_eq!(plan.vertices(), &[Position::new(0, 0)]);
    assert_eq!(plan.pending(), Some(Move::new(Direction::Right, 9)));
    assert_eq!(plan.resolved(), 0);
    assert_eq!(plan.area(), 0);
}

#[test]
fn empty_plan_has_no_area() {
    let plan = DigPlan::new();
    assert_eq!(plan.pending(), None);
    assert_eq!(plan.area(), 0);
    assert_eq!(shoelace_area(&[]), 0);
    assert_eq!(plan.into_vertices(), vec![Position::new(0, 0)]);
}

#[test]
fn turn_table_convex_pairs() {
    use Direction::*;
    let convex = [(Up, Right), (Right, Down), (Down, Left), (Left, Up)];
    for a in Direction::ALL {
        for b in Direction::ALL {
            let want = if convex.contains(&(a, b)) {
                Turn::Convex
            } else {
                Turn::Concave
            };
            assert_eq!(a.turn_to(b), want, "{a:?} -> {b:?}");
        }
    }
}

#[test]
fn concave_start_shortens_next_segment() {
    // R then U is a left turn (concave): the R leg gains nothing at its end,
    // and the U leg loses a cell there and regains it at its convex end.
    let plan: DigPlan = [
        Move::new(Direction::Right, 3),
        Move::new(Direction::Up, 3),
        Move::new(Direction::Right, 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        plan.vertices(),
        &[Position::new(0, 0), Position::new(0, 3), Position::new(-3, 3)]
    );
}

#[test]
fn area_is_idempotent() {
    let plan = plan_from(SAMPLE, DecodeMode::Alternate);
    let first = shoelace_area(plan.vertices());
    let second = shoelace_area(plan.vertices());
    assert_eq!(first, second);
    assert_eq!(plan.area(), first);
}

#[test]
fn render_matches_both_decodings() {
    let mv = Move::new(Direction::Left, 1234);
    let line = mv.render();
    assert_eq!(line, "L 1234 (#004d22)");
    assert_eq!(decode_line(&line, DecodeMode::Primary).unwrap(), mv);
    assert_eq!(decode_line(&line, DecodeMode::Alternate).unwrap(), mv);
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    /// Every resolved move adds exactly one vertex.
    #[test]
    fn vertex_count_tracks_resolved_moves(
        moves in prop::collection::vec((direction(), 0u32..50), 0..40)
    ) {
        let mut plan = DigPlan::new();
        for (i, (d, n)) in moves.iter().enumerate() {
            plan.push(Move::new(*d, *n));
            prop_assert_eq!(plan.vertices().len(), i + 1);
        }
        prop_assert_eq!(plan.vertices()[0], Position::new(0, 0));
    }

    /// Skyline loops start after a convex corner, so the outline area equals
    /// the Pick's-theorem cell count of the centerline.
    #[test]
    fn skyline_area_matches_cell_count(seed in any::<u64>(), index in 0u64..64) {
        let cfg = PlanCfg {
            bars: BarCount::Uniform { min: 1, max: 12 },
            max_width: 20,
            max_height: 20,
        };
        let moves = draw_skyline(cfg, ReplayToken { seed, index });
        let plan: DigPlan = moves.iter().copied().collect();
        prop_assert_eq!(plan.area(), lattice_cells(&moves));
    }

    /// Rendered lines decode to the same move in both modes.
    #[test]
    fn rendered_moves_decode_identically(d in direction(), n in 0u32..=Move::MAX_HEX_DISTANCE) {
        let mv = Move::new(d, n);
        let line = mv.render();
        prop_assert_eq!(decode_line(&line, DecodeMode::Primary).unwrap(), mv);
        prop_assert_eq!(decode_line(&line, DecodeMode::Alternate).unwrap(), mv);
    }
}
