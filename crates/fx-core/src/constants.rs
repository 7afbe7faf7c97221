//! Default tuning for every effect. Runtime values live in [`crate::config`];
//! these are the stock numbers the site ships with, expressed in ticks
//! (60 per second) and pixels.

// Simulation clock
pub const TICK_HZ: f32 = 60.0;
pub const MAX_TICKS_PER_FRAME: u32 = 4; // backgrounded tabs catch up at most this far

// Cursor follower
pub const FOLLOWER_DAMPING: f32 = 0.1; // fraction of remaining distance closed per tick

// Trail ring
pub const TRAIL_CAPACITY: usize = 12;
pub const TRAIL_DAMPING: f32 = 0.35;
pub const TRAIL_FALLOFF: f32 = 0.85; // damping multiplier applied per point down the ring
pub const TRAIL_MIN_GAP_TICKS: u32 = 2;

// Ambient pointer particles
pub const PARTICLE_CAPACITY: usize = 50;
pub const AMBIENT_SPAWN_PROBABILITY: f32 = 0.05;
pub const AMBIENT_MIN_GAP_TICKS: u32 = 3;
pub const AMBIENT_MAX_AGE_TICKS: u32 = 120; // ~2 s float
pub const AMBIENT_RISE: f32 = -0.85; // px per tick, negative y is up
pub const AMBIENT_JITTER: f32 = 0.4;

// Click burst
pub const BURST_COUNT: usize = 15;
pub const BURST_SPEED_MIN: f32 = 1.5; // px per tick
pub const BURST_SPEED_MAX: f32 = 4.5;
pub const BURST_MAX_AGE_TICKS: u32 = 50;

// Click overlays (the expanding "holes")
pub const OVERLAY_HOLD_TICKS: u32 = 150;
pub const OVERLAY_COLLAPSE_TICKS: u32 = 30;
pub const OVERLAY_GROW_TICKS: u32 = 9;
pub const OVERLAY_SIZE_MIN: f32 = 40.0;
pub const OVERLAY_SIZE_MAX: f32 = 90.0;

// Background orbs
pub const ORB_AREA_PER_ORB: f32 = 90_000.0; // px^2 of viewport per orb
pub const ORB_MIN_COUNT: usize = 6;
pub const ORB_MAX_COUNT: usize = 24;
pub const ORB_SPEED_MAX: f32 = 0.35;
pub const ORB_SIZE_MIN: f32 = 12.0;
pub const ORB_SIZE_MAX: f32 = 46.0;
pub const ORB_BOB_RATE: f32 = 0.02; // radians per tick
pub const ORB_BOB_AMPLITUDE: f32 = 0.15;
pub const ORB_WRAP_MARGIN: f32 = 24.0; // orbs wrap this far past the viewport edge

// Matrix rain
pub const RAIN_COLUMN_WIDTH: f32 = 18.0;
pub const RAIN_GLYPH_HEIGHT: f32 = 18.0;
pub const RAIN_SPEED_MIN: f32 = 2.0;
pub const RAIN_SPEED_MAX: f32 = 5.5;
pub const RAIN_LEN_MIN: usize = 8;
pub const RAIN_LEN_MAX: usize = 26;
pub const RAIN_FILL_PROBABILITY: f32 = 0.7; // initial column occupancy
pub const RAIN_RESPAWN_PROBABILITY: f32 = 0.03; // per empty column per tick
pub const RAIN_MUTATE_PROBABILITY: f32 = 0.1; // per streak per tick
pub const RAIN_GLYPHS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', '0', '1', '2', '3', '4', '5',
    '6', '7', '8', '9',
];

// Typing cycle
pub const TYPE_TICKS_PER_CHAR: u32 = 6; // ~100 ms
pub const DELETE_TICKS_PER_CHAR: u32 = 3; // ~50 ms
pub const TYPING_HOLD_TICKS: u32 = 120; // pause with the full phrase shown
pub const TYPING_REST_TICKS: u32 = 30; // pause before the next phrase starts

// Glitch text
pub const GLITCH_INTERVAL_TICKS: u32 = 210; // quiet stretch between scramble windows
pub const GLITCH_WINDOW_TICKS: u32 = 18;
pub const GLITCH_INTENSITY: f32 = 0.35; // per-character scramble probability
pub const GLITCH_CHARS: &[char] = &[
    '#', '$', '%', '&', '@', '!', '?', '/', '\\', '<', '>', '+', '*', '=', '0', '1',
];
