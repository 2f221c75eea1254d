//! Property tests for the grid engine.
//!
//! Random fields are built through the public API only, so every property
//! holds for the logical field as a caller sees it.

use conway_life::{Coord, GridEngine, GridError, SimulationBackend};
use proptest::prelude::*;

const MAX_SIZE: usize = 12;

fn coords(size: usize) -> impl Iterator<Item = Coord> {
    let size = size as i32;
    (0..size).flat_map(move |x| (0..size).map(move |y| Coord::new(x, y)))
}

fn snapshot(engine: &GridEngine) -> Vec<bool> {
    coords(engine.size()).map(|c| engine.cell_state(c).unwrap()).collect()
}

/// A size and a set of cells to bring to life, all within that size
fn field() -> impl Strategy<Value = (usize, Vec<(i32, i32)>)> {
    (1..=MAX_SIZE).prop_flat_map(|size| {
        let coord = (0..size as i32, 0..size as i32);
        (Just(size), prop::collection::vec(coord, 0..size * size))
    })
}

fn build(size: usize, cells: &[(i32, i32)]) -> GridEngine {
    let mut engine = GridEngine::new(size).unwrap();
    for &(x, y) in cells {
        let coord = Coord::new(x, y);
        if !engine.cell_state(coord).unwrap() {
            engine.toggle(coord).unwrap();
        }
    }
    engine
}

/// Live neighbours of a logical cell, counted within the logical field only.
fn neighbours(engine: &GridEngine, coord: Coord) -> usize {
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let n = Coord::new(coord.x + dx, coord.y + dy);
            if engine.cell_state(n).unwrap_or(false) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    /// A fresh engine is dead everywhere
    #[test]
    fn prop_fresh_engine_is_dead(size in 1..=MAX_SIZE) {
        let engine = GridEngine::new(size).unwrap();
        prop_assert!(snapshot(&engine).iter().all(|&alive| !alive));
        prop_assert!(engine.border_is_dead());
    }

    /// toggle returns the new state, which query then reports
    #[test]
    fn prop_toggle_then_query((size, cells) in field(), x in 0..MAX_SIZE as i32, y in 0..MAX_SIZE as i32) {
        let mut engine = build(size, &cells);
        let coord = Coord::new(x % size as i32, y % size as i32);
        let before = engine.cell_state(coord).unwrap();

        let after = engine.toggle(coord).unwrap();
        prop_assert_eq!(after, !before);
        prop_assert_eq!(engine.cell_state(coord).unwrap(), after);
    }

    /// Toggling twice restores the whole field
    #[test]
    fn prop_double_toggle_is_identity((size, cells) in field(), x in 0..MAX_SIZE as i32, y in 0..MAX_SIZE as i32) {
        let mut engine = build(size, &cells);
        let coord = Coord::new(x % size as i32, y % size as i32);
        let before = engine.clone();

        engine.toggle(coord).unwrap();
        engine.toggle(coord).unwrap();
        prop_assert_eq!(engine, before);
    }

    /// Same history, same result
    #[test]
    fn prop_advance_is_deterministic((size, cells) in field(), steps in 1..6usize) {
        let mut a = build(size, &cells);
        let mut b = build(size, &cells);
        for _ in 0..steps {
            a.advance();
            b.advance();
        }
        prop_assert_eq!(snapshot(&a), snapshot(&b));
    }

    /// One generation of the logical field follows the birth and survival rules
    #[test]
    fn prop_advance_follows_rules((size, cells) in field()) {
        let before = build(size, &cells);
        let mut after = before.clone();
        after.advance();

        for coord in coords(size) {
            let alive = before.cell_state(coord).unwrap();
            let n = neighbours(&before, coord);
            let expected = matches!((alive, n), (true, 2) | (true, 3) | (false, 3));
            prop_assert_eq!(after.cell_state(coord).unwrap(), expected, "cell {:?} with {} neighbours", coord, n);
        }
    }

    /// Out-of-range access fails without touching the field
    #[test]
    fn prop_out_of_range_is_rejected((size, cells) in field(), x in -50i32..50, y in -50i32..50) {
        let in_field = |v: i32| v >= 0 && (v as usize) < size;
        prop_assume!(!in_field(x) || !in_field(y));

        let mut engine = build(size, &cells);
        let before = engine.clone();
        let coord = Coord::new(x, y);
        let expected = GridError::OutOfRange { x, y, size };

        prop_assert_eq!(engine.toggle(coord), Err(expected.clone()));
        prop_assert_eq!(engine.cell_state(coord), Err(expected));
        prop_assert_eq!(engine, before);
    }

    /// Reset is indistinguishable from a fresh engine
    #[test]
    fn prop_reset_is_fresh((size, cells) in field(), steps in 0..4usize) {
        let mut engine = build(size, &cells);
        for _ in 0..steps {
            engine.advance();
        }
        SimulationBackend::reset(&mut engine);
        prop_assert_eq!(snapshot(&engine), snapshot(&GridEngine::new(size).unwrap()));
        prop_assert_eq!(engine.size(), size);
    }
}

#[test]
fn zero_size_is_invalid() {
    assert_eq!(GridEngine::new(0), Err(GridError::InvalidSize { size: 0 }));
}

#[test]
fn dead_cell_births_only_with_three_neighbours() {
    let around = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
    for n in 0..=around.len() {
        let engine = build(3, &around[..n]);
        let mut next = engine.clone();
        next.advance();
        assert_eq!(next.cell_state(Coord::new(1, 1)).unwrap(), n == 3, "{} neighbours", n);
    }
}

#[test]
fn live_cell_survives_only_with_two_or_three_neighbours() {
    let around = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
    for n in 0..=around.len() {
        let mut engine = build(3, &around[..n]);
        engine.toggle(Coord::new(1, 1)).unwrap();
        engine.advance();
        assert_eq!(engine.cell_state(Coord::new(1, 1)).unwrap(), n == 2 || n == 3, "{} neighbours", n);
    }
}

#[test]
fn blinker_is_period_two() {
    let row = [(2, 1), (2, 2), (2, 3)];
    let column = [(1, 2), (2, 2), (3, 2)];
    let mut engine = build(5, &row);

    engine.advance();
    assert_eq!(snapshot(&engine), snapshot(&build(5, &column)));
    engine.advance();
    assert_eq!(snapshot(&engine), snapshot(&build(5, &row)));
}
