//! Fixed-timestep accumulator. The browser hands us wall-clock frame
//! deltas; the simulation only understands whole ticks. This converts one
//! into the other and caps the catch-up burst after a long stall so a
//! backgrounded tab does not fast-forward the whole page.

use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    tick_seconds: f32,
    max_ticks_per_frame: u32,
    accum: f32,
}

impl TickClock {
    pub fn new(tick_hz: f32, max_ticks_per_frame: u32) -> Self {
        Self {
            tick_seconds: 1.0 / tick_hz.max(1.0),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accum: 0.0,
        }
    }

    /// Feeds one frame's delta and returns how many ticks are due.
    /// Time past the cap is dropped, not owed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt.as_secs_f32();
        let mut due = 0;
        while self.accum >= self.tick_seconds && due < self.max_ticks_per_frame {
            self.accum -= self.tick_seconds;
            due += 1;
        }
        if due == self.max_ticks_per_frame {
            self.accum = 0.0;
        }
        due
    }

    pub fn tick_seconds(&self) -> f32 {
        self.tick_seconds
    }
}
