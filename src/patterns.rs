// patterns.rs - Named starting patterns and random fills

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backend::SimulationBackend;
use crate::error::{GridError, GridResult};
use crate::grid::Coord;

/// A named set of live cells, relative to a top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

impl Pattern {
    /// Case-insensitive lookup in the built-in catalog
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Height and width of the bounding box
    pub fn extent(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(x, y)| (h.max(x + 1), w.max(y + 1)))
    }

    /// Origin that centres the pattern on a field of `size`
    pub fn centred_origin(&self, size: usize) -> Coord {
        let (h, w) = self.extent();
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        Coord::new((size - h) / 2, (size - w) / 2)
    }

    pub fn fits(&self, size: usize, origin: Coord) -> bool {
        self.cells_at(size, origin).is_ok()
    }

    /// Absolute coordinates of the pattern at `origin`, or the first cell
    /// that falls outside a field of `size`. Offsets saturate at the `i32` bounds.
    pub fn cells_at(&self, size: usize, origin: Coord) -> GridResult<Vec<Coord>> {
        self.cells
            .iter()
            .map(|&(dx, dy)| {
                let x = origin.x.saturating_add(dx);
                let y = origin.y.saturating_add(dy);
                let coord = Coord::new(x, y);
                if in_field(size, coord) {
                    Ok(coord)
                } else {
                    Err(GridError::OutOfRange { x, y, size })
                }
            })
            .collect()
    }

    /// Brings every pattern cell to life at `origin`.
    ///
    /// Nothing is toggled unless the whole pattern fits.
    pub fn place<B: SimulationBackend + ?Sized>(&self, backend: &mut B, origin: Coord) -> GridResult<()> {
        for coord in self.cells_at(backend.size(), origin)? {
            if !backend.is_alive(coord)? {
                backend.toggle(coord)?;
            }
        }
        debug!("Placed {} at ({}, {})", self.name, origin.x, origin.y);
        Ok(())
    }
}

fn in_field(size: usize, coord: Coord) -> bool {
    let ok = |v: i32| v >= 0 && (v as usize) < size;
    ok(coord.x) && ok(coord.y)
}

/// Overwrites the visible field with a seeded random fill.
///
/// `density` is the chance of each cell being alive, clamped to `0.0..=1.0`.
pub fn randomize<B: SimulationBackend + ?Sized>(backend: &mut B, seed: u64, density: f64) -> GridResult<()> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let size = i32::try_from(backend.size()).unwrap_or(i32::MAX);

    for x in 0..size {
        for y in 0..size {
            let coord = Coord::new(x, y);
            if rng.gen_bool(density) != backend.is_alive(coord)? {
                backend.toggle(coord)?;
            }
        }
    }
    debug!("Randomized field (seed {}, density {:.2})", seed, density);
    Ok(())
}
