// grid.rs - Padded grid engine for Conway's Game of Life
//
// The logical field is surrounded by a dead moat of BORDER cells on every side,
// so neighbour counting for any logical cell never touches the matrix edge.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::error::{GridError, GridResult};

/// Width of the dead margin added around the logical field
pub const BORDER: usize = 10;

/// Largest logical side length; every cell must be reachable through a `Coord`
pub const MAX_SIZE: usize = i32::MAX as usize;

pub type TRow = Vec<bool>;
pub type TGrid = Vec<TRow>;

/// A cell position in logical (user-visible) space, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Conway's rules for a single cell given its live neighbour count
pub fn next_state(is_alive: bool, live_neighbours: usize) -> bool {
    match (is_alive, live_neighbours) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Square Game of Life field with a fixed dead border.
///
/// `cells[x][y]` holds the padded matrix; logical `(x, y)` lives at
/// `(x + BORDER, y + BORDER)`. The matrix dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    size: usize,
    cells: TGrid,
}

impl GridEngine {
    /// Creates an all-dead field of `size` x `size` logical cells.
    pub fn new(size: usize) -> GridResult<Self> {
        let side = match size.checked_add(2 * BORDER) {
            Some(side) if (1..=MAX_SIZE).contains(&size) => side,
            _ => return Err(GridError::InvalidSize { size }),
        };
        debug!("Created {}x{} grid ({}x{} padded)", size, size, side, side);

        Ok(Self {
            size,
            cells: vec![vec![false; side]; side],
        })
    }

    /// A fresh engine of the same size. The old one is simply dropped by the caller.
    pub fn reset(&self) -> Self {
        debug!("Reset {}x{} grid", self.size, self.size);
        let side = self.padded_size();
        Self {
            size: self.size,
            cells: vec![vec![false; side]; side],
        }
    }

    /// Logical side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of the internal matrix, border included
    pub fn padded_size(&self) -> usize {
        self.cells.len()
    }

    /// Flips one logical cell and returns its new state.
    pub fn toggle(&mut self, coord: Coord) -> GridResult<bool> {
        let (x, y) = self.padded(coord)?;
        let cell = &mut self.cells[x][y];
        *cell = !*cell;
        trace!("Toggled ({}, {}) -> {}", coord.x, coord.y, *cell);
        Ok(*cell)
    }

    /// Current state of one logical cell
    pub fn cell_state(&self, coord: Coord) -> GridResult<bool> {
        let (x, y) = self.padded(coord)?;
        Ok(self.cells[x][y])
    }

    /// Advances the whole padded matrix by one generation.
    ///
    /// Every neighbour read sees the previous generation; the new matrix
    /// replaces the old one only once it is complete.
    pub fn advance(&mut self) {
        let side = self.padded_size();
        let mut next_grid: TGrid = vec![vec![false; side]; side];

        for (x, next_row) in next_grid.iter_mut().enumerate() {
            for (y, next_cell) in next_row.iter_mut().enumerate() {
                *next_cell = next_state(self.cells[x][y], self.live_neighbours(x, y));
            }
        }

        self.cells = next_grid;
    }

    /// Number of live cells inside the logical field
    pub fn live_cells(&self) -> usize {
        self.cells[BORDER..BORDER + self.size]
            .iter()
            .map(|row| row[BORDER..BORDER + self.size].iter().filter(|&&c| c).count())
            .sum()
    }

    /// True while no cell of the moat has come alive
    pub fn border_is_dead(&self) -> bool {
        let interior = BORDER..BORDER + self.size;
        self.cells.iter().enumerate().all(|(x, row)| {
            row.iter()
                .enumerate()
                .all(|(y, &alive)| !alive || (interior.contains(&x) && interior.contains(&y)))
        })
    }

    /// Hash of the logical field, used to spot repeating states
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for row in &self.cells[BORDER..BORDER + self.size] {
            row[BORDER..BORDER + self.size].hash(&mut hasher);
        }
        hasher.finish()
    }

    fn padded(&self, coord: Coord) -> GridResult<(usize, usize)> {
        let in_field = |v: i32| v >= 0 && (v as usize) < self.size;
        if !in_field(coord.x) || !in_field(coord.y) {
            return Err(GridError::OutOfRange {
                x: coord.x,
                y: coord.y,
                size: self.size,
            });
        }
        Ok((coord.x as usize + BORDER, coord.y as usize + BORDER))
    }

    // Neighbours outside the matrix do not contribute; there is no wraparound.
    fn live_neighbours(&self, x: usize, y: usize) -> usize {
        let last = self.padded_size() - 1;
        let mut count = 0;
        for nx in x.saturating_sub(1)..=(x + 1).min(last) {
            for ny in y.saturating_sub(1)..=(y + 1).min(last) {
                if (nx, ny) != (x, y) && self.cells[nx][ny] {
                    count += 1;
                }
            }
        }
        count
    }
}
