//! Headless simulation behind the portfolio site's visual effects: the
//! cursor follower and trail, pointer particles and click bursts,
//! ephemeral click overlays, drifting orbs, matrix rain, and the typing
//! and glitch text cycles. Everything advances through
//! [`EffectEngine::tick`]; nothing here touches the DOM, so the whole
//! layer runs (and is tested) off-browser.

pub mod clock;
pub mod config;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod form;
pub mod glitch;
pub mod orbs;
pub mod overlays;
pub mod particles;
pub mod rain;
pub mod trail;
pub mod typing;

pub use clock::TickClock;
pub use config::{ConfigError, EffectsConfig};
pub use engine::{EffectEngine, EffectEvent, EntityId, Viewport};
pub use form::{is_valid_email, validate_contact, FormError};
pub use glitch::GlitchText;
pub use orbs::{Orb, OrbField};
pub use overlays::{EphemeralOverlay, OverlayPhase, OverlaySet};
pub use particles::{Particle, ParticleField, ParticleKind};
pub use rain::{MatrixRain, RainStreak};
pub use trail::{Follower, TrailPoint, TrailRing};
pub use typing::{TypingCycle, TypingPhase};
