//! Typewriter cycle for the hero tagline: type a phrase, hold, delete it,
//! rest, move to the next. Pure tick arithmetic, one state machine.

use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
    Resting,
}

#[derive(Debug)]
pub struct TypingCycle {
    cfg: TypingConfig,
    phrase_idx: usize,
    char_count: usize,
    chars_shown: usize,
    phase: TypingPhase,
    ticks_in_phase: u32,
    dirty: bool,
}

impl TypingCycle {
    pub(crate) fn new(cfg: &TypingConfig) -> Self {
        let char_count = cfg
            .phrases
            .first()
            .map(|p| p.chars().count())
            .unwrap_or(0);
        Self {
            cfg: cfg.clone(),
            phrase_idx: 0,
            char_count,
            chars_shown: 0,
            phase: TypingPhase::Typing,
            ticks_in_phase: 0,
            dirty: true,
        }
    }

    pub(crate) fn step(&mut self) {
        if self.cfg.phrases.is_empty() {
            return;
        }
        self.ticks_in_phase += 1;
        match self.phase {
            TypingPhase::Typing => {
                if self.chars_shown >= self.char_count {
                    self.enter(TypingPhase::Holding);
                } else if self.ticks_in_phase >= self.cfg.type_ticks_per_char {
                    self.chars_shown += 1;
                    self.dirty = true;
                    self.ticks_in_phase = 0;
                    if self.chars_shown >= self.char_count {
                        self.enter(TypingPhase::Holding);
                    }
                }
            }
            TypingPhase::Holding => {
                if self.ticks_in_phase >= self.cfg.hold_ticks {
                    self.enter(TypingPhase::Deleting);
                }
            }
            TypingPhase::Deleting => {
                if self.chars_shown == 0 {
                    self.enter(TypingPhase::Resting);
                } else if self.ticks_in_phase >= self.cfg.delete_ticks_per_char {
                    self.chars_shown -= 1;
                    self.dirty = true;
                    self.ticks_in_phase = 0;
                    if self.chars_shown == 0 {
                        self.enter(TypingPhase::Resting);
                    }
                }
            }
            TypingPhase::Resting => {
                if self.ticks_in_phase >= self.cfg.rest_ticks {
                    self.phrase_idx = (self.phrase_idx + 1) % self.cfg.phrases.len();
                    self.char_count = self.cfg.phrases[self.phrase_idx].chars().count();
                    self.enter(TypingPhase::Typing);
                }
            }
        }
    }

    fn enter(&mut self, phase: TypingPhase) {
        self.phase = phase;
        self.ticks_in_phase = 0;
    }

    /// The currently revealed prefix of the active phrase.
    pub fn visible(&self) -> &str {
        let Some(phrase) = self.cfg.phrases.get(self.phrase_idx) else {
            return "";
        };
        match phrase.char_indices().nth(self.chars_shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// True once per visible-text change; reading clears it.
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
