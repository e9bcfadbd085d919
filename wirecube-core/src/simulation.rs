/// Simulation step and fixed-timestep accumulator
use std::time::Duration;

use crate::geometry::Cube;

/// Full-turn constant used for angle reduction
pub const FULL_TURN: f64 = 6.28;

/// Default simulation tick: 50 ticks per second
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// Shortest tick accepted; anything below is raised to this
pub const MIN_TICK: Duration = Duration::from_millis(1);

/// Upper bound on catch-up ticks run in a single frame
pub const MAX_TICKS_PER_FRAME: usize = 25;

/// Reduce an angle from above only; values at or below `FULL_TURN` are kept.
pub fn wrap_angle(mut angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    if angle > FULL_TURN * 1024.0 {
        // Skip most of the turns at once; the loop below finishes the job.
        angle -= FULL_TURN * ((angle / FULL_TURN).floor() - 1.0);
    }
    while angle > FULL_TURN {
        angle -= FULL_TURN;
    }
    angle
}

/// Advance every auto-rotating cube by one tick
pub fn step(cubes: &mut [Cube]) {
    for cube in cubes.iter_mut() {
        cube.advance();
    }
}

/// Accumulates wall-clock time and hands it out in fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(MIN_TICK),
            accumulator: Duration::ZERO,
        }
    }

    /// Tick length derived from a rate in Hz. Rates with no representable
    /// period fall back to `DEFAULT_TICK`.
    pub fn from_rate(rate: f64) -> Self {
        let tick = Duration::try_from_secs_f64(1.0 / rate).unwrap_or(DEFAULT_TICK);
        Self::new(tick)
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn accumulate(&mut self, delta: Duration) {
        self.accumulator += delta;
    }

    /// Number of whole ticks to run now. The remainder stays accumulated.
    pub fn drain(&mut self) -> usize {
        let mut ticks = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            ticks += 1;
        }

        if ticks > MAX_TICKS_PER_FRAME {
            log::warn!(
                "Simulation fell behind, dropping {} ticks",
                ticks - MAX_TICKS_PER_FRAME
            );
            ticks = MAX_TICKS_PER_FRAME;
        }
        ticks
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}
