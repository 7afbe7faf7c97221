//! Pointer follower and the comet trail behind it.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::{FollowerConfig, TrailConfig};
use crate::easing::damp_vec2;
use crate::engine::{EffectEvent, EntityId, IdAlloc};

/// The single smoothed dot chasing the pointer. It closes a fixed fraction
/// of the remaining distance each tick, so it converges without overshoot.
#[derive(Debug)]
pub struct Follower {
    position: Vec2,
    target: Vec2,
    damping: f32,
    active: bool,
}

impl Follower {
    pub(crate) fn new(cfg: &FollowerConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            damping: cfg.damping,
            active: false,
        }
    }

    /// Snaps to the first sample so the dot does not sweep in from the
    /// origin, then eases toward every later one.
    pub(crate) fn retarget(&mut self, at: Vec2) {
        if !self.active {
            self.position = at;
        }
        self.target = at;
        self.active = true;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn step(&mut self) {
        if self.active {
            self.position = damp_vec2(self.position, self.target, self.damping);
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// False until the first pointer sample and after the pointer leaves.
    pub fn active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub id: EntityId,
    pub position: Vec2,
}

/// Bounded ring of trail points, newest at the front. Spawning past
/// capacity evicts the oldest, so the live count never exceeds `capacity`.
#[derive(Debug)]
pub struct TrailRing {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    damping: f32,
    falloff: f32,
    min_gap_ticks: u32,
    last_sample_tick: Option<u64>,
}

impl TrailRing {
    pub(crate) fn new(cfg: &TrailConfig) -> Self {
        Self {
            points: VecDeque::with_capacity(cfg.capacity + 1),
            capacity: cfg.capacity,
            damping: cfg.damping,
            falloff: cfg.falloff,
            min_gap_ticks: cfg.min_gap_ticks,
            last_sample_tick: None,
        }
    }

    /// Accepts a pointer sample unless one already landed inside the
    /// throttle window. Repeat calls within the window are no-ops.
    pub(crate) fn pointer_sample(
        &mut self,
        at: Vec2,
        now_tick: u64,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        if let Some(last) = self.last_sample_tick {
            if now_tick.saturating_sub(last) < u64::from(self.min_gap_ticks) {
                return;
            }
        }
        self.last_sample_tick = Some(now_tick);

        let id = ids.next_id();
        self.points.push_front(TrailPoint { id, position: at });
        events.push(EffectEvent::TrailSpawned { id, position: at });
        while self.points.len() > self.capacity {
            if let Some(old) = self.points.pop_back() {
                events.push(EffectEvent::TrailEvicted { id: old.id });
            }
        }
    }

    /// Eases every point toward the pointer target. The damping factor
    /// decays down the ring, so older points lag further behind.
    pub(crate) fn step(&mut self, target: Vec2) {
        let mut k = self.damping;
        for point in self.points.iter_mut() {
            point.position = damp_vec2(point.position, target, k);
            k *= self.falloff;
        }
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
