//! The effect engine: one struct owning every effect pool, advanced by a
//! single `tick` sweep. Input handlers mutate state immediately; the
//! lifecycle events they raise are buffered and handed to the caller on
//! the next tick, so the presentation layer sees each change exactly once,
//! in order, when it draws.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, EffectsConfig};
use crate::glitch::GlitchText;
use crate::orbs::OrbField;
use crate::overlays::OverlaySet;
use crate::particles::{ParticleField, ParticleKind};
use crate::rain::MatrixRain;
use crate::trail::{Follower, TrailRing};
use crate::typing::TypingCycle;

/// Stable handle for one on-screen entity. Never reused within an engine,
/// so the presentation layer can key DOM nodes off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct IdAlloc {
    next: u64,
}

impl IdAlloc {
    pub(crate) fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Lifecycle notifications for the presentation layer. Position updates
/// for live entities are not events; the caller reads those straight off
/// the engine after each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectEvent {
    TrailSpawned { id: EntityId, position: Vec2 },
    TrailEvicted { id: EntityId },
    ParticleSpawned { id: EntityId, kind: ParticleKind, position: Vec2 },
    ParticleExpired { id: EntityId },
    OverlayOpened { id: EntityId, position: Vec2, size: f32 },
    OverlayClosing { id: EntityId },
    OverlayExpired { id: EntityId },
    StreakSpawned { id: EntityId, column: u32 },
    StreakExpired { id: EntityId },
    OrbSpawned { id: EntityId, position: Vec2, size: f32 },
    OrbRetired { id: EntityId },
}

pub struct EffectEngine {
    viewport: Viewport,
    pending_viewport: Option<Viewport>,
    ticks: u64,
    rng: StdRng,
    ids: IdAlloc,
    pending: Vec<EffectEvent>,
    follower: Follower,
    trail: TrailRing,
    particles: ParticleField,
    overlays: OverlaySet,
    orbs: OrbField,
    rain: MatrixRain,
    typing: TypingCycle,
    glitch: GlitchText,
}

impl EffectEngine {
    /// Builds an engine with empty pools. Orbs and rain populate on the
    /// first tick, through the same events as everything after, so the
    /// caller needs no separate initial sync.
    pub fn new(config: EffectsConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "[engine] seed {seed}, viewport {:.0}x{:.0}",
            viewport.width,
            viewport.height
        );
        Ok(Self {
            viewport,
            pending_viewport: Some(viewport),
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
            ids: IdAlloc::default(),
            pending: Vec::new(),
            follower: Follower::new(&config.follower),
            trail: TrailRing::new(&config.trail),
            particles: ParticleField::new(&config.particles),
            overlays: OverlaySet::new(&config.overlays),
            orbs: OrbField::new(&config.orbs, viewport),
            rain: MatrixRain::new(&config.rain, viewport),
            typing: TypingCycle::new(&config.typing),
            glitch: GlitchText::new(&config.glitch),
        })
    }

    /// Pointer moved to viewport coordinates (x, y). Retargets the
    /// follower, records a trail point, maybe sheds an ambient particle.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        self.follower.retarget(at);
        self.trail
            .pointer_sample(at, self.ticks, &mut self.ids, &mut self.pending);
        self.particles.pointer_sample(
            at,
            self.ticks,
            &mut self.rng,
            &mut self.ids,
            &mut self.pending,
        );
    }

    /// Pointer left the page; the follower hides until the next sample.
    pub fn on_pointer_leave(&mut self) {
        self.follower.deactivate();
    }

    /// Click at (x, y): radial particle burst plus one ephemeral overlay.
    pub fn on_click(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        self.particles
            .burst_at(at, &mut self.rng, &mut self.ids, &mut self.pending);
        self.overlays
            .spawn_at(at, self.ticks, &mut self.rng, &mut self.ids, &mut self.pending);
    }

    /// Records a viewport change to apply on the next tick. Orb population
    /// and rain columns re-balance then, not mid-frame.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.pending_viewport = Some(Viewport::new(width, height));
    }

    /// Source text for the glitch heading.
    pub fn set_glitch_base(&mut self, text: &str) {
        self.glitch.set_base(text);
    }

    /// Advances the simulation one tick. Events buffered since the last
    /// call drain into `events` first, then everything this tick produces,
    /// in the order it happened.
    pub fn tick(&mut self, events: &mut Vec<EffectEvent>) {
        events.append(&mut self.pending);
        if let Some(viewport) = self.pending_viewport.take() {
            self.viewport = viewport;
            self.orbs
                .retarget(viewport, &mut self.rng, &mut self.ids, events);
            self.rain.set_viewport(viewport, events);
        }
        self.ticks += 1;

        self.follower.step();
        self.trail.step(self.follower.target());
        self.particles.step(events);
        self.overlays.sweep(self.ticks, events);
        self.orbs.step();
        self.rain.step(&mut self.rng, &mut self.ids, events);
        self.typing.step();
        self.glitch.step(&mut self.rng);
    }

    /// Completed ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn follower(&self) -> &Follower {
        &self.follower
    }

    pub fn trail(&self) -> &TrailRing {
        &self.trail
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    pub fn orbs(&self) -> &OrbField {
        &self.orbs
    }

    pub fn rain(&self) -> &MatrixRain {
        &self.rain
    }

    /// Typed-out tagline text, only when it changed since the last call.
    pub fn typing_text_changed(&mut self) -> Option<&str> {
        if self.typing.take_dirty() {
            Some(self.typing.visible())
        } else {
            None
        }
    }

    /// Glitch heading text, only when it changed since the last call.
    pub fn glitch_text_changed(&mut self) -> Option<&str> {
        if self.glitch.take_dirty() {
            Some(self.glitch.current())
        } else {
            None
        }
    }

    pub fn typing(&self) -> &TypingCycle {
        &self.typing
    }

    pub fn glitch(&self) -> &GlitchText {
        &self.glitch
    }
}
