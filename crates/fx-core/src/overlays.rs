//! Click-spawned "hole" overlays. Each one pops open, holds for a fixed
//! number of ticks, collapses over a second fixed stretch, and is removed.
//! No per-overlay timers; the engine's tick sweep checks ages in one pass.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::OverlayConfig;
use crate::easing::ease_in_out_quad;
use crate::engine::{EffectEvent, EntityId, IdAlloc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Open and growing or fully grown.
    Holding,
    /// Reverse animation running.
    Closing,
}

#[derive(Clone, Copy, Debug)]
pub struct EphemeralOverlay {
    pub id: EntityId,
    pub position: Vec2,
    pub size: f32,
    born_tick: u64,
    hold_ticks: u32,
    collapse_ticks: u32,
    grow_ticks: u32,
}

impl EphemeralOverlay {
    fn age(&self, now_tick: u64) -> u64 {
        now_tick.saturating_sub(self.born_tick)
    }

    pub fn phase(&self, now_tick: u64) -> OverlayPhase {
        if self.age(now_tick) < u64::from(self.hold_ticks) {
            OverlayPhase::Holding
        } else {
            OverlayPhase::Closing
        }
    }

    /// Visual scale at `now_tick`: eases 0 -> 1 over the grow window,
    /// holds at 1, then eases back to 0 across the collapse window.
    pub fn scale(&self, now_tick: u64) -> f32 {
        let age = self.age(now_tick);
        let hold = u64::from(self.hold_ticks);
        if age < hold {
            let t = (age as f32 / self.grow_ticks as f32).min(1.0);
            ease_in_out_quad(t)
        } else {
            let t = (age - hold) as f32 / self.collapse_ticks as f32;
            1.0 - ease_in_out_quad(t.min(1.0))
        }
    }
}

#[derive(Debug)]
pub struct OverlaySet {
    overlays: Vec<EphemeralOverlay>,
    cfg: OverlayConfig,
}

impl OverlaySet {
    pub(crate) fn new(cfg: &OverlayConfig) -> Self {
        Self {
            overlays: Vec::new(),
            cfg: cfg.clone(),
        }
    }

    pub(crate) fn spawn_at(
        &mut self,
        at: Vec2,
        now_tick: u64,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        let id = ids.next_id();
        let size = rng.gen_range(self.cfg.size_min..=self.cfg.size_max);
        self.overlays.push(EphemeralOverlay {
            id,
            position: at,
            size,
            born_tick: now_tick,
            hold_ticks: self.cfg.hold_ticks,
            collapse_ticks: self.cfg.collapse_ticks,
            grow_ticks: self.cfg.grow_ticks,
        });
        events.push(EffectEvent::OverlayOpened {
            id,
            position: at,
            size,
        });
    }

    /// One pass over every overlay: announce the collapse exactly when the
    /// hold expires, remove exactly when the collapse finishes. An overlay
    /// born at tick T is removed at tick T + hold + collapse, never sooner.
    pub(crate) fn sweep(&mut self, now_tick: u64, events: &mut Vec<EffectEvent>) {
        self.overlays.retain(|o| {
            let age = o.age(now_tick);
            if age == u64::from(o.hold_ticks) {
                events.push(EffectEvent::OverlayClosing { id: o.id });
            }
            if age >= u64::from(o.hold_ticks) + u64::from(o.collapse_ticks) {
                events.push(EffectEvent::OverlayExpired { id: o.id });
                false
            } else {
                true
            }
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &EphemeralOverlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
