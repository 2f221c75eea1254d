// session.rs - A running simulation as seen by its front-end
//
// Owns one backend and serialises every action on it: user toggles, timed
// advances and resets all go through `&mut Session`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::backend::SimulationBackend;
use crate::error::GridResult;
use crate::grid::Coord;
use crate::patterns::{self, Pattern};

pub const MIN_DELAY: Duration = Duration::from_millis(25);
pub const MAX_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// How many recent field fingerprints are kept for cycle detection
const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// The new field matches one of the recent ones; auto-run is stopped.
    CycleDetected,
}

pub struct Session<B: SimulationBackend> {
    backend: B,
    running: bool,
    delay: Duration,
    generation: u64,
    last_update: Instant,
    history: VecDeque<u64>,
    border_warned: bool,
}

impl<B: SimulationBackend> Session<B> {
    pub fn new(backend: B, delay: Duration) -> Self {
        Self {
            backend,
            running: false,
            delay: delay.clamp(MIN_DELAY, MAX_DELAY),
            generation: 0,
            last_update: Instant::now(),
            history: VecDeque::with_capacity(HISTORY_LEN + 1),
            border_warned: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sets the auto-advance interval, clamped to `MIN_DELAY..=MAX_DELAY`
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.clamp(MIN_DELAY, MAX_DELAY);
    }

    pub fn is_alive(&self, coord: Coord) -> GridResult<bool> {
        self.backend.is_alive(coord)
    }

    /// Flips one cell. The generation counter is left alone.
    pub fn toggle_cell(&mut self, coord: Coord) -> GridResult<bool> {
        let alive = self.backend.toggle(coord)?;
        self.history.clear();
        Ok(alive)
    }

    /// Advances one generation and checks the result against recent history.
    pub fn step(&mut self) -> StepOutcome {
        if self.history.is_empty() {
            self.history.push_back(self.backend.fingerprint());
        }

        self.backend.advance();
        self.generation += 1;

        if !self.border_warned && !self.backend.border_is_dead() {
            warn!("Live cells reached the hidden border at generation {}", self.generation);
            self.border_warned = true;
        }

        let fingerprint = self.backend.fingerprint();
        if self.history.contains(&fingerprint) {
            if self.running {
                warn!("Cycle detected at generation {}, stopping", self.generation);
                self.running = false;
            }
            return StepOutcome::CycleDetected;
        }

        self.history.push_back(fingerprint);
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
        StepOutcome::Advanced
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("Simulation started (delay {}ms)", self.delay.as_millis());
            self.running = true;
            self.last_update = Instant::now();
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("Simulation stopped at generation {}", self.generation);
            self.running = false;
        }
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Timer hook: advances once if running and `delay` has passed since the
    /// last timed advance. Returns whether a step happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running || now.duration_since(self.last_update) < self.delay {
            return false;
        }
        self.last_update = now;
        self.step();
        true
    }

    /// Time left until the next timed advance, if running
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        self.running
            .then(|| self.delay.saturating_sub(now.duration_since(self.last_update)))
    }

    /// Stops the simulation and replaces the backend with a fresh one.
    pub fn reset(&mut self) {
        self.stop();
        self.backend.reset();
        self.clear_history();
        info!("Simulation reset ({}x{})", self.backend.size(), self.backend.size());
    }

    /// Resets the field and places `pattern` at `origin`.
    ///
    /// Fails without touching the field if the pattern does not fit.
    pub fn apply_pattern(&mut self, pattern: &Pattern, origin: Coord) -> GridResult<()> {
        pattern.cells_at(self.backend.size(), origin)?;
        self.reset();
        pattern.place(&mut self.backend, origin)
    }

    /// Resets the field and fills it randomly.
    pub fn randomize(&mut self, seed: u64, density: f64) -> GridResult<()> {
        self.reset();
        patterns::randomize(&mut self.backend, seed, density)
    }

    fn clear_history(&mut self) {
        self.generation = 0;
        self.history.clear();
        self.border_warned = false;
    }
}
