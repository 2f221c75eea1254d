// backend.rs - The capability a front-end needs from a simulation

use crate::error::GridResult;
use crate::grid::{Coord, GridEngine};

/// Everything the presentation layer calls on a simulation.
///
/// All coordinates are logical; implementations never expose their internal
/// layout.
pub trait SimulationBackend {
    /// Logical side length of the field
    fn size(&self) -> usize;

    /// Flips one cell and returns its new state
    fn toggle(&mut self, coord: Coord) -> GridResult<bool>;

    /// Advances every cell by one generation
    fn advance(&mut self);

    /// Current state of one cell
    fn is_alive(&self, coord: Coord) -> GridResult<bool>;

    /// Replaces the simulation with a fresh one of the same size
    fn reset(&mut self);

    fn live_cells(&self) -> usize {
        let size = i32::try_from(self.size()).unwrap_or(i32::MAX);
        (0..size)
            .flat_map(|x| (0..size).map(move |y| Coord::new(x, y)))
            .filter(|&coord| self.is_alive(coord).unwrap_or(false))
            .count()
    }

    /// Whether cells outside the visible field are all dead
    fn border_is_dead(&self) -> bool {
        true
    }

    /// Hash of the visible field
    fn fingerprint(&self) -> u64;
}

impl SimulationBackend for GridEngine {
    fn size(&self) -> usize {
        GridEngine::size(self)
    }

    fn toggle(&mut self, coord: Coord) -> GridResult<bool> {
        GridEngine::toggle(self, coord)
    }

    fn advance(&mut self) {
        GridEngine::advance(self)
    }

    fn is_alive(&self, coord: Coord) -> GridResult<bool> {
        self.cell_state(coord)
    }

    fn reset(&mut self) {
        *self = GridEngine::reset(self);
    }

    fn live_cells(&self) -> usize {
        GridEngine::live_cells(self)
    }

    fn border_is_dead(&self) -> bool {
        GridEngine::border_is_dead(self)
    }

    fn fingerprint(&self) -> u64 {
        GridEngine::fingerprint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<B: SimulationBackend>(backend: &mut B) -> Vec<bool> {
        backend.toggle(Coord::new(1, 0)).unwrap();
        backend.toggle(Coord::new(1, 1)).unwrap();
        backend.toggle(Coord::new(1, 2)).unwrap();
        backend.advance();
        (0..3).map(|x| backend.is_alive(Coord::new(x, 1)).unwrap()).collect()
    }

    #[test]
    fn grid_engine_through_the_trait() {
        let mut engine = GridEngine::new(3).unwrap();
        assert_eq!(run(&mut engine), vec![true, true, true]);
        assert_eq!(SimulationBackend::live_cells(&engine), 3);

        SimulationBackend::reset(&mut engine);
        assert_eq!(SimulationBackend::size(&engine), 3);
        assert_eq!(SimulationBackend::live_cells(&engine), 0);
    }

    struct Flat {
        cells: Vec<bool>,
    }

    impl SimulationBackend for Flat {
        fn size(&self) -> usize {
            2
        }
        fn toggle(&mut self, coord: Coord) -> GridResult<bool> {
            let i = (coord.x * 2 + coord.y) as usize;
            self.cells[i] = !self.cells[i];
            Ok(self.cells[i])
        }
        fn advance(&mut self) {}
        fn is_alive(&self, coord: Coord) -> GridResult<bool> {
            Ok(self.cells[(coord.x * 2 + coord.y) as usize])
        }
        fn reset(&mut self) {
            self.cells = vec![false; 4];
        }
        fn fingerprint(&self) -> u64 {
            0
        }
    }

    #[test]
    fn default_live_cells_counts_via_queries() {
        let mut flat = Flat { cells: vec![false; 4] };
        flat.toggle(Coord::new(0, 1)).unwrap();
        flat.toggle(Coord::new(1, 1)).unwrap();
        assert_eq!(flat.live_cells(), 2);
        assert!(flat.border_is_dead());
    }
}
