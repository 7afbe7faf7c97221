//! Small interpolation helpers shared by the effects and the page glue.

use glam::Vec2;

/// Quadratic ease-in-out over normalized progress `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -2.0 * t * t + 4.0 * t - 1.0
    }
}

/// Moves `current` a fixed fraction of the way toward `target`.
/// With `k` in (0, 1) the gap shrinks every call and never overshoots.
#[inline]
pub fn damp(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current + (target - current) * k
}

/// Offset for a depth layer under parallax scroll. Layer 0 moves at half
/// scroll speed and each deeper layer 10% faster.
#[inline]
pub fn parallax_offset(scroll_y: f32, layer: usize) -> f32 {
    scroll_y * (0.5 + 0.1 * layer as f32)
}

/// Linear ramp toward a target at a fixed step per tick. Used for the
/// skill-bar fills, which grow a constant amount per frame until full.
#[derive(Clone, Copy, Debug)]
pub struct Ramp {
    current: f32,
    target: f32,
    step: f32,
}

impl Ramp {
    pub fn new(start: f32, target: f32, step: f32) -> Self {
        Self {
            current: start,
            target,
            step: step.abs(),
        }
    }

    /// Advances one tick and returns the new value, clamped at the target.
    pub fn advance(&mut self) -> f32 {
        if self.current < self.target {
            self.current = (self.current + self.step).min(self.target);
        } else if self.current > self.target {
            self.current = (self.current - self.step).max(self.target);
        }
        self.current
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn done(&self) -> bool {
        self.current == self.target
    }
}

/// Fixed-duration eased tween between two scroll offsets.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    duration_ticks: u32,
    elapsed: u32,
}

impl ScrollTween {
    pub fn new(from: f32, to: f32, duration_ticks: u32) -> Self {
        Self {
            from,
            to,
            duration_ticks: duration_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Advances one tick and returns the eased position. After
    /// `duration_ticks` calls the result is exactly `to`.
    pub fn step(&mut self) -> f32 {
        self.elapsed = (self.elapsed + 1).min(self.duration_ticks);
        let t = self.elapsed as f32 / self.duration_ticks as f32;
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration_ticks
    }
}
