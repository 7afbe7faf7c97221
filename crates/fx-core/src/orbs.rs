//! Slow decorative orbs drifting behind the page. Population scales with
//! viewport area and is re-balanced whenever the viewport changes.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::OrbConfig;
use crate::engine::{EffectEvent, EntityId, IdAlloc, Viewport};

#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub id: EntityId,
    pub position: Vec2,
    pub size: f32,
    velocity: Vec2,
    bob_phase: f32,
}

#[derive(Debug)]
pub struct OrbField {
    orbs: Vec<Orb>,
    cfg: OrbConfig,
    viewport: Viewport,
}

impl OrbField {
    pub(crate) fn new(cfg: &OrbConfig, viewport: Viewport) -> Self {
        Self {
            orbs: Vec::new(),
            cfg: cfg.clone(),
            viewport,
        }
    }

    fn target_count(&self, viewport: Viewport) -> usize {
        let by_area = (viewport.area() / self.cfg.area_per_orb) as usize;
        by_area.clamp(self.cfg.min_count, self.cfg.max_count)
    }

    /// Grows or shrinks the population to match the viewport. New orbs
    /// appear at random positions; excess orbs are retired youngest-first.
    pub(crate) fn retarget(
        &mut self,
        viewport: Viewport,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        self.viewport = viewport;
        let target = self.target_count(viewport);
        while self.orbs.len() > target {
            if let Some(orb) = self.orbs.pop() {
                events.push(EffectEvent::OrbRetired { id: orb.id });
            }
        }
        while self.orbs.len() < target {
            let id = ids.next_id();
            let position = Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            );
            let heading = rng.gen::<f32>() * TAU;
            let speed = self.cfg.speed_max * rng.gen_range(0.2..=1.0);
            let size = rng.gen_range(self.cfg.size_min..=self.cfg.size_max);
            self.orbs.push(Orb {
                id,
                position,
                size,
                velocity: Vec2::from_angle(heading) * speed,
                bob_phase: rng.gen::<f32>() * TAU,
            });
            events.push(EffectEvent::OrbSpawned { id, position, size });
        }
    }

    /// Drift plus a slow vertical bob; positions wrap once an orb clears
    /// the margin past the viewport edge, so none are ever lost offscreen.
    pub(crate) fn step(&mut self) {
        let margin = self.cfg.wrap_margin;
        let w = self.viewport.width;
        let h = self.viewport.height;
        for orb in self.orbs.iter_mut() {
            orb.bob_phase = (orb.bob_phase + self.cfg.bob_rate) % TAU;
            orb.position += orb.velocity;
            orb.position.y += orb.bob_phase.sin() * self.cfg.bob_amplitude;

            if orb.position.x < -margin {
                orb.position.x = w + margin;
            } else if orb.position.x > w + margin {
                orb.position.x = -margin;
            }
            if orb.position.y < -margin {
                orb.position.y = h + margin;
            } else if orb.position.y > h + margin {
                orb.position.y = -margin;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orb> {
        self.orbs.iter()
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }
}
