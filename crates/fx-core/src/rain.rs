//! Matrix-style glyph rain for the hero backdrop. One streak per column at
//! most; streaks fall at their own speed, flicker individual glyphs, and
//! respawn into empty columns at random.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use crate::config::RainConfig;
use crate::constants::RAIN_GLYPHS;
use crate::engine::{EffectEvent, EntityId, IdAlloc, Viewport};

#[derive(Clone, Debug)]
pub struct RainStreak {
    pub id: EntityId,
    pub column: u32,
    /// Y of the leading glyph; the rest trail upward from here.
    pub head_y: f32,
    speed: f32,
    glyphs: SmallVec<[char; 24]>,
}

impl RainStreak {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs top-to-bottom, one per line, head last.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.glyphs.len() * 4);
        for (i, g) in self.glyphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push(*g);
        }
        out
    }
}

#[derive(Debug)]
pub struct MatrixRain {
    streaks: Vec<RainStreak>,
    cfg: RainConfig,
    columns: u32,
    viewport_height: f32,
    primed: bool,
}

impl MatrixRain {
    pub(crate) fn new(cfg: &RainConfig, viewport: Viewport) -> Self {
        Self {
            streaks: Vec::new(),
            cfg: cfg.clone(),
            columns: Self::columns_for(cfg, viewport.width),
            viewport_height: viewport.height,
            primed: false,
        }
    }

    fn columns_for(cfg: &RainConfig, width: f32) -> u32 {
        ((width / cfg.column_width) as u32).max(1)
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport, events: &mut Vec<EffectEvent>) {
        self.columns = Self::columns_for(&self.cfg, viewport.width);
        self.viewport_height = viewport.height;
        // Streaks whose column no longer exists drop out immediately; new
        // columns fill back in through the normal respawn roll.
        let columns = self.columns;
        self.streaks.retain(|s| {
            if s.column >= columns {
                events.push(EffectEvent::StreakExpired { id: s.id });
                false
            } else {
                true
            }
        });
    }

    fn spawn_into(
        &mut self,
        column: u32,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        let id = ids.next_id();
        let len = rng.gen_range(self.cfg.len_min..=self.cfg.len_max);
        let glyphs = (0..len)
            .map(|_| RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())])
            .collect();
        let head_y = -(rng.gen::<f32>() * len as f32 * self.cfg.glyph_height);
        self.streaks.push(RainStreak {
            id,
            column,
            head_y,
            speed: rng.gen_range(self.cfg.speed_min..=self.cfg.speed_max),
            glyphs,
        });
        events.push(EffectEvent::StreakSpawned { id, column });
    }

    pub(crate) fn step(
        &mut self,
        rng: &mut StdRng,
        ids: &mut IdAlloc,
        events: &mut Vec<EffectEvent>,
    ) {
        let glyph_height = self.cfg.glyph_height;
        let floor = self.viewport_height;
        for streak in self.streaks.iter_mut() {
            streak.head_y += streak.speed;
            if rng.gen::<f32>() < self.cfg.mutate_probability && !streak.glyphs.is_empty() {
                let at = rng.gen_range(0..streak.glyphs.len());
                streak.glyphs[at] = RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())];
            }
        }
        self.streaks.retain(|s| {
            let top = s.head_y - (s.len().saturating_sub(1)) as f32 * glyph_height;
            if top > floor {
                events.push(EffectEvent::StreakExpired { id: s.id });
                false
            } else {
                true
            }
        });

        let mut occupied = vec![false; self.columns as usize];
        for s in &self.streaks {
            if let Some(slot) = occupied.get_mut(s.column as usize) {
                *slot = true;
            }
        }
        // First tick floods most columns at once; afterwards empties refill
        // one random roll at a time.
        let chance = if self.primed {
            self.cfg.respawn_probability
        } else {
            self.cfg.fill_probability
        };
        self.primed = true;
        for column in 0..self.columns {
            if !occupied[column as usize] && rng.gen::<f32>() < chance {
                self.spawn_into(column, rng, ids, events);
            }
        }
    }

    /// Screen position of a streak's leading glyph.
    pub fn head_position(&self, streak: &RainStreak) -> Vec2 {
        Vec2::new(streak.column as f32 * self.cfg.column_width, streak.head_y)
    }

    /// Y of a streak's topmost glyph; the node is anchored here.
    pub fn top_y(&self, streak: &RainStreak) -> f32 {
        streak.head_y - (streak.len().saturating_sub(1)) as f32 * self.cfg.glyph_height
    }

    pub fn column_width(&self) -> f32 {
        self.cfg.column_width
    }

    pub fn glyph_height(&self) -> f32 {
        self.cfg.glyph_height
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &RainStreak> {
        self.streaks.iter()
    }

    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }
}
