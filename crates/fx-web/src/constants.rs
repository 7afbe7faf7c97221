// Page wiring constants: element hooks the markup must provide, node
// classes the surface emits, and presentation-only tuning.

// Elements looked up at startup (all optional; missing ones are skipped)
pub const TYPING_EL_ID: &str = "typing-text";
pub const GLITCH_EL_ID: &str = "glitch-text";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const HAMBURGER_ID: &str = "hamburger";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const REVEAL_SELECTOR: &str = "[data-reveal], .stat-card, .skill-card, .project-card";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";

// Classes stamped on generated effect nodes (styled by the site CSS)
pub const LAYER_CLASS: &str = "fx-layer";
pub const FOLLOWER_CLASS: &str = "fx-cursor";
pub const TRAIL_CLASS: &str = "fx-trail";
pub const PARTICLE_CLASS: &str = "fx-particle";
pub const BURST_CLASS: &str = "fx-burst";
pub const HOLE_CLASS: &str = "fx-hole";
pub const ORB_CLASS: &str = "fx-orb";
pub const RAIN_CLASS: &str = "fx-rain";
pub const CLOSING_CLASS: &str = "closing";
pub const ACTIVE_CLASS: &str = "active";

// Scroll-linked chrome
pub const NAV_SCROLLED_AT_PX: f64 = 100.0;
pub const BACK_TO_TOP_AT_PX: f64 = 300.0;
pub const SCROLL_TWEEN_TICKS: u32 = 60; // ~1 s glide to an anchor
pub const NAV_OFFSET_PX: f32 = 80.0; // fixed navbar height compensated on anchor jumps

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_RAMP_STEP: f32 = 1.7; // percent per tick, ~1 s for a full bar

// Toasts
pub const TOAST_SLIDE_IN_TICKS: u64 = 6;
pub const TOAST_DISMISS_TICKS: u64 = 180; // 3 s on screen
pub const TOAST_SLIDE_OUT_TICKS: u64 = 18;
pub const TOAST_STACK_STEP_PX: f32 = 64.0;

// Trail presentation: per-index opacity falloff down the ring
pub const TRAIL_OPACITY_FALLOFF: f32 = 0.8;
