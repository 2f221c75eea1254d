// lib.rs - Conway's Game of Life on a finite, padded grid

pub mod backend;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod session;
pub mod ui;

pub use backend::SimulationBackend;
pub use config::{Args, InitialField, SessionConfig};
pub use error::{ConfigError, GridError, GridResult};
pub use grid::{BORDER, Coord, GridEngine, MAX_SIZE};
pub use patterns::{PATTERNS, Pattern};
pub use session::{Session, StepOutcome};
pub use ui::LifeApp;
