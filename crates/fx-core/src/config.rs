//! Runtime tuning for the effect engine. Every number the simulation
//! consumes lives here so a page can restyle the effects without touching
//! the loop itself. `EffectsConfig::default()` reproduces the stock site.

use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name}: damping must be in (0, 1], got {value}")]
    DampingOutOfRange { name: &'static str, value: f32 },
    #[error("{name}: probability must be in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f32 },
    #[error("{name}: capacity must be nonzero")]
    ZeroCapacity { name: &'static str },
    #[error("{name}: duration must be at least one tick")]
    ZeroTicks { name: &'static str },
    #[error("{name}: range is inverted ({min} > {max})")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name}: count must be nonzero")]
    ZeroCount { name: &'static str },
}

#[derive(Clone, Debug)]
pub struct FollowerConfig {
    /// Fraction of the remaining distance closed each tick.
    pub damping: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            damping: FOLLOWER_DAMPING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub capacity: usize,
    pub damping: f32,
    /// Damping multiplier applied per point down the ring, so the tail lags.
    pub falloff: f32,
    /// Minimum ticks between accepted pointer samples.
    pub min_gap_ticks: u32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: TRAIL_CAPACITY,
            damping: TRAIL_DAMPING,
            falloff: TRAIL_FALLOFF,
            min_gap_ticks: TRAIL_MIN_GAP_TICKS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    /// Hard cap on live particles; the oldest is evicted past this.
    pub capacity: usize,
    pub ambient_spawn_probability: f32,
    pub ambient_min_gap_ticks: u32,
    pub ambient_max_age_ticks: u32,
    /// Vertical drift per tick for ambient motes (negative rises).
    pub ambient_rise: f32,
    pub ambient_jitter: f32,
    pub burst_count: usize,
    pub burst_speed_min: f32,
    pub burst_speed_max: f32,
    pub burst_max_age_ticks: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: PARTICLE_CAPACITY,
            ambient_spawn_probability: AMBIENT_SPAWN_PROBABILITY,
            ambient_min_gap_ticks: AMBIENT_MIN_GAP_TICKS,
            ambient_max_age_ticks: AMBIENT_MAX_AGE_TICKS,
            ambient_rise: AMBIENT_RISE,
            ambient_jitter: AMBIENT_JITTER,
            burst_count: BURST_COUNT,
            burst_speed_min: BURST_SPEED_MIN,
            burst_speed_max: BURST_SPEED_MAX,
            burst_max_age_ticks: BURST_MAX_AGE_TICKS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Ticks an overlay stays fully open before it starts collapsing.
    pub hold_ticks: u32,
    pub collapse_ticks: u32,
    pub grow_ticks: u32,
    pub size_min: f32,
    pub size_max: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hold_ticks: OVERLAY_HOLD_TICKS,
            collapse_ticks: OVERLAY_COLLAPSE_TICKS,
            grow_ticks: OVERLAY_GROW_TICKS,
            size_min: OVERLAY_SIZE_MIN,
            size_max: OVERLAY_SIZE_MAX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbConfig {
    /// Viewport area in px^2 backing one orb; count is clamped below.
    pub area_per_orb: f32,
    pub min_count: usize,
    pub max_count: usize,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub bob_rate: f32,
    pub bob_amplitude: f32,
    pub wrap_margin: f32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            area_per_orb: ORB_AREA_PER_ORB,
            min_count: ORB_MIN_COUNT,
            max_count: ORB_MAX_COUNT,
            speed_max: ORB_SPEED_MAX,
            size_min: ORB_SIZE_MIN,
            size_max: ORB_SIZE_MAX,
            bob_rate: ORB_BOB_RATE,
            bob_amplitude: ORB_BOB_AMPLITUDE,
            wrap_margin: ORB_WRAP_MARGIN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RainConfig {
    pub column_width: f32,
    pub glyph_height: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub len_min: usize,
    pub len_max: usize,
    /// Chance each column starts occupied on the first tick.
    pub fill_probability: f32,
    /// Per-tick chance an empty column respawns.
    pub respawn_probability: f32,
    pub mutate_probability: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            column_width: RAIN_COLUMN_WIDTH,
            glyph_height: RAIN_GLYPH_HEIGHT,
            speed_min: RAIN_SPEED_MIN,
            speed_max: RAIN_SPEED_MAX,
            len_min: RAIN_LEN_MIN,
            len_max: RAIN_LEN_MAX,
            fill_probability: RAIN_FILL_PROBABILITY,
            respawn_probability: RAIN_RESPAWN_PROBABILITY,
            mutate_probability: RAIN_MUTATE_PROBABILITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ticks_per_char: u32,
    pub delete_ticks_per_char: u32,
    pub hold_ticks: u32,
    pub rest_ticks: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "AI/ML Developer",
                "Python Enthusiast",
                "Neural Network Architect",
                "Automation Specialist",
                "Problem Solver",
                "Tech Innovator",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            type_ticks_per_char: TYPE_TICKS_PER_CHAR,
            delete_ticks_per_char: DELETE_TICKS_PER_CHAR,
            hold_ticks: TYPING_HOLD_TICKS,
            rest_ticks: TYPING_REST_TICKS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlitchConfig {
    pub interval_ticks: u32,
    pub window_ticks: u32,
    pub intensity: f32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            interval_ticks: GLITCH_INTERVAL_TICKS,
            window_ticks: GLITCH_WINDOW_TICKS,
            intensity: GLITCH_INTENSITY,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectsConfig {
    pub follower: FollowerConfig,
    pub trail: TrailConfig,
    pub particles: ParticleConfig,
    pub overlays: OverlayConfig,
    pub orbs: OrbConfig,
    pub rain: RainConfig,
    pub typing: TypingConfig,
    pub glitch: GlitchConfig,
}

impl EffectsConfig {
    /// Rejects values the simulation cannot run with. Anything passing here
    /// keeps every pool bounded and every lerp convergent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        damping("follower.damping", self.follower.damping)?;
        damping("trail.damping", self.trail.damping)?;
        damping("trail.falloff", self.trail.falloff)?;
        if self.trail.capacity == 0 {
            return Err(ConfigError::ZeroCapacity { name: "trail" });
        }
        if self.particles.capacity == 0 {
            return Err(ConfigError::ZeroCapacity { name: "particles" });
        }
        probability(
            "particles.ambient_spawn_probability",
            self.particles.ambient_spawn_probability,
        )?;
        ticks(
            "particles.ambient_max_age_ticks",
            self.particles.ambient_max_age_ticks,
        )?;
        ticks(
            "particles.burst_max_age_ticks",
            self.particles.burst_max_age_ticks,
        )?;
        if self.particles.burst_count == 0 {
            return Err(ConfigError::ZeroCount {
                name: "particles.burst_count",
            });
        }
        range(
            "particles.burst_speed",
            self.particles.burst_speed_min,
            self.particles.burst_speed_max,
        )?;
        ticks("overlays.hold_ticks", self.overlays.hold_ticks)?;
        ticks("overlays.collapse_ticks", self.overlays.collapse_ticks)?;
        ticks("overlays.grow_ticks", self.overlays.grow_ticks)?;
        range("overlays.size", self.overlays.size_min, self.overlays.size_max)?;
        if self.orbs.min_count > self.orbs.max_count {
            return Err(ConfigError::InvertedRange {
                name: "orbs.count",
                min: self.orbs.min_count as f32,
                max: self.orbs.max_count as f32,
            });
        }
        range("orbs.size", self.orbs.size_min, self.orbs.size_max)?;
        range("rain.speed", self.rain.speed_min, self.rain.speed_max)?;
        range(
            "rain.len",
            self.rain.len_min as f32,
            self.rain.len_max as f32,
        )?;
        probability("rain.fill_probability", self.rain.fill_probability)?;
        probability("rain.respawn_probability", self.rain.respawn_probability)?;
        probability("rain.mutate_probability", self.rain.mutate_probability)?;
        ticks("typing.type_ticks_per_char", self.typing.type_ticks_per_char)?;
        ticks(
            "typing.delete_ticks_per_char",
            self.typing.delete_ticks_per_char,
        )?;
        ticks("glitch.interval_ticks", self.glitch.interval_ticks)?;
        ticks("glitch.window_ticks", self.glitch.window_ticks)?;
        probability("glitch.intensity", self.glitch.intensity)?;
        Ok(())
    }
}

fn damping(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::DampingOutOfRange { name, value })
    }
}

fn probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

fn ticks(name: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroTicks { name })
    } else {
        Ok(())
    }
}

fn range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min > max {
        Err(ConfigError::InvertedRange { name, min, max })
    } else {
        Ok(())
    }
}
