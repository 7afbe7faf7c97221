//! Periodic text scramble for the glitch heading. Most of the time the
//! base text shows untouched; every interval a short window scrambles a
//! random subset of characters each tick, then the base text is restored.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GlitchConfig;
use crate::constants::GLITCH_CHARS;

#[derive(Debug)]
pub struct GlitchText {
    base: String,
    output: String,
    cfg: GlitchConfig,
    cycle_pos: u32,
    scrambled: bool,
    dirty: bool,
}

impl GlitchText {
    pub(crate) fn new(cfg: &GlitchConfig) -> Self {
        Self {
            base: String::new(),
            output: String::new(),
            cfg: cfg.clone(),
            cycle_pos: 0,
            scrambled: false,
            dirty: false,
        }
    }

    /// Replaces the source text and restarts the quiet stretch.
    pub(crate) fn set_base(&mut self, text: &str) {
        self.base = text.to_string();
        self.output = text.to_string();
        self.cycle_pos = 0;
        self.scrambled = false;
        self.dirty = true;
    }

    pub(crate) fn step(&mut self, rng: &mut StdRng) {
        if self.base.is_empty() {
            return;
        }
        let period = self.cfg.interval_ticks + self.cfg.window_ticks;
        self.cycle_pos = (self.cycle_pos + 1) % period;
        if self.cycle_pos >= self.cfg.interval_ticks {
            // Inside the scramble window: re-roll every tick so it flickers.
            self.output = self
                .base
                .chars()
                .map(|c| {
                    if !c.is_whitespace() && rng.gen::<f32>() < self.cfg.intensity {
                        GLITCH_CHARS[rng.gen_range(0..GLITCH_CHARS.len())]
                    } else {
                        c
                    }
                })
                .collect();
            self.scrambled = true;
            self.dirty = true;
        } else if self.scrambled {
            self.output.clone_from(&self.base);
            self.scrambled = false;
            self.dirty = true;
        }
    }

    /// Whatever should be on screen right now; equals the base text
    /// outside scramble windows, always the same character count inside.
    pub fn current(&self) -> &str {
        &self.output
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
