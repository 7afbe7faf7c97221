//! Short-lived particles: ambient motes shed while the pointer moves and
//! radial bursts fired on click. One pool, one cap, one sweep.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::ParticleConfig;
use crate::engine::{EffectEvent, EntityId, IdAlloc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Shed by pointer movement; drifts upward and fades.
    Ambient,
    /// Part of a click burst; flies radially outward.
    Burst,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub id: EntityId,
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub age: u32,
    pub max_age: u32,
}

impl Particle {
    /// Linear fade from 1 at birth to 0 at expiry.
    #[inline]
    pub fn opacity(&self) -> f32 {
        1.0 - (self.age as f32 / self.max_age as f32).min(1.0)
    }
}

/// All live particles in creation order, oldest first. The cap evicts from
/// the front, so the pool never grows past `capacity` no matter how fast
/// events arrive.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    cfg: ParticleConfig,
    last_ambient_tick: Option<u64>,
}

impl ParticleField {
    pub(crate) fn new(cfg: &ParticleConfig) -> Self {
        Self {
            particles: Vec::with_capacity(cfg.capacity),
            cfg: cfg.clone(),
            last_ambient_tick: None,
        }
    }

    /// Maybe sheds one ambient mote at the pointer. Throttled to one roll
    /// per gap window, and the roll itself only passes a small fraction of
    /// the time, so ordinary mouse travel leaves a sparse wake.
    pub(crate) fn pointer_sample(
        &mut self,
        at: Vec2,
        now_tick: u64,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        if let Some(last) = self.last_ambient_tick {
            if now_tick.saturating_sub(last) < u64::from(self.cfg.ambient_min_gap_ticks) {
                return;
            }
        }
        self.last_ambient_tick = Some(now_tick);

        if rng.gen::<f32>() >= self.cfg.ambient_spawn_probability {
            return;
        }
        let sway = (rng.gen::<f32>() * 2.0 - 1.0) * self.cfg.ambient_jitter;
        self.push(
            Particle {
                id: ids.next_id(),
                kind: ParticleKind::Ambient,
                position: at,
                velocity: Vec2::new(sway, self.cfg.ambient_rise),
                age: 0,
                max_age: self.cfg.ambient_max_age_ticks,
            },
            events,
        );
    }

    /// Fires the full radial burst: `burst_count` particles at evenly
    /// spaced angles, each with an independent random speed.
    pub(crate) fn burst_at(
        &mut self,
        at: Vec2,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        let n = self.cfg.burst_count;
        for i in 0..n {
            let angle = TAU * i as f32 / n as f32;
            let speed = rng.gen_range(self.cfg.burst_speed_min..=self.cfg.burst_speed_max);
            self.push(
                Particle {
                    id: ids.next_id(),
                    kind: ParticleKind::Burst,
                    position: at,
                    velocity: Vec2::from_angle(angle) * speed,
                    age: 0,
                    max_age: self.cfg.burst_max_age_ticks,
                },
                events,
            );
        }
    }

    fn push(&mut self, particle: Particle, events: &mut Vec<EffectEvent>) {
        events.push(EffectEvent::ParticleSpawned {
            id: particle.id,
            kind: particle.kind,
            position: particle.position,
        });
        self.particles.push(particle);
        while self.particles.len() > self.cfg.capacity {
            let old = self.particles.remove(0);
            events.push(EffectEvent::ParticleExpired { id: old.id });
        }
    }

    /// Integrates every particle, then sweeps the dead in the same pass
    /// over the pool. A particle born with `max_age` M dies on the M-th
    /// tick after its spawn.
    pub(crate) fn step(&mut self, events: &mut Vec<EffectEvent>) {
        for p in self.particles.iter_mut() {
            p.position += p.velocity;
            p.age += 1;
        }
        self.particles.retain(|p| {
            let live = p.age < p.max_age;
            if !live {
                events.push(EffectEvent::ParticleExpired { id: p.id });
            }
            live
        });
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }
}
