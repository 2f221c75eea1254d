// config.rs - Command line configuration

use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::grid::{Coord, MAX_SIZE};
use crate::patterns::Pattern;
use crate::session::{DEFAULT_DELAY, MAX_DELAY, MIN_DELAY};

/// Chance of a cell starting alive with `--seed`
pub const RANDOM_DENSITY: f64 = 0.33;

#[derive(Debug, Clone, Parser)]
#[command(name = "conway_life", about = "Conway's Game of Life on a finite grid")]
pub struct Args {
    /// Side length of the square field.
    #[arg(long, default_value_t = 40)]
    pub size: usize,

    /// Milliseconds between generations while running (25-1000).
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Start with a named pattern centred on the field.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Start with a random field from this seed.
    #[arg(long, conflicts_with = "pattern")]
    pub seed: Option<u64>,
}

/// What the field starts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialField {
    Empty,
    Pattern(&'static Pattern, Coord),
    Random { seed: u64, density: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub size: usize,
    pub delay: Duration,
    pub initial: InitialField,
}

impl Args {
    pub fn validate(&self) -> Result<SessionConfig, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge { size: self.size, max: MAX_SIZE });
        }

        let delay = Duration::from_millis(self.delay_ms);
        if delay < MIN_DELAY || delay > MAX_DELAY {
            return Err(ConfigError::DelayOutOfRange {
                delay_ms: self.delay_ms,
                min: MIN_DELAY.as_millis() as u64,
                max: MAX_DELAY.as_millis() as u64,
            });
        }

        let initial = match (&self.pattern, self.seed) {
            (Some(name), _) => {
                let pattern = Pattern::find(name).ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
                let origin = pattern.centred_origin(self.size);
                if !pattern.fits(self.size, origin) {
                    return Err(ConfigError::PatternTooLarge {
                        name: pattern.name.to_string(),
                        size: self.size,
                    });
                }
                InitialField::Pattern(pattern, origin)
            }
            (None, Some(seed)) => InitialField::Random { seed, density: RANDOM_DENSITY },
            (None, None) => InitialField::Empty,
        };

        Ok(SessionConfig {
            size: self.size,
            delay,
            initial,
        })
    }
}
