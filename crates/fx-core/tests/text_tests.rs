// Typing cycle and glitch text, driven tick by tick through the engine.

use fx_core::{EffectEngine, EffectsConfig, TypingPhase, Viewport};

fn text_config() -> EffectsConfig {
    let mut cfg = EffectsConfig::default();
    cfg.orbs.min_count = 0;
    cfg.orbs.max_count = 0;
    cfg.rain.fill_probability = 0.0;
    cfg.rain.respawn_probability = 0.0;
    cfg.typing.phrases = vec!["Hi!".to_string(), "Ok".to_string()];
    cfg.typing.type_ticks_per_char = 2;
    cfg.typing.delete_ticks_per_char = 1;
    cfg.typing.hold_ticks = 4;
    cfg.typing.rest_ticks = 3;
    cfg
}

fn engine_with(cfg: EffectsConfig) -> EffectEngine {
    EffectEngine::new(cfg, Viewport::new(1024.0, 768.0), 5).unwrap()
}

fn tick(engine: &mut EffectEngine) {
    let mut events = Vec::new();
    engine.tick(&mut events);
}

#[test]
fn typing_reveals_one_char_per_interval() {
    let mut engine = engine_with(text_config());
    assert_eq!(engine.typing().visible(), "");

    // Two ticks per character: "", "", "H", "H", "Hi", ...
    let expected = ["", "H", "H", "Hi", "Hi", "Hi!"];
    for (i, want) in expected.iter().enumerate() {
        tick(&mut engine);
        assert_eq!(
            engine.typing().visible(),
            *want,
            "wrong prefix after tick {}",
            i + 1
        );
    }
    assert_eq!(engine.typing().phase(), TypingPhase::Holding);
}

#[test]
fn full_cycle_walks_type_hold_delete_rest() {
    let mut engine = engine_with(text_config());
    // Type "Hi!": 6 ticks.
    for _ in 0..6 {
        tick(&mut engine);
    }
    assert_eq!(engine.typing().phase(), TypingPhase::Holding);

    // Hold 4 ticks, then deleting begins.
    for _ in 0..4 {
        assert_eq!(engine.typing().phase(), TypingPhase::Holding);
        tick(&mut engine);
    }
    assert_eq!(engine.typing().phase(), TypingPhase::Deleting);

    // Delete one char per tick: "Hi", "H", "" and into the rest pause.
    tick(&mut engine);
    assert_eq!(engine.typing().visible(), "Hi");
    tick(&mut engine);
    assert_eq!(engine.typing().visible(), "H");
    tick(&mut engine);
    assert_eq!(engine.typing().visible(), "");
    assert_eq!(engine.typing().phase(), TypingPhase::Resting);

    // Rest 3 ticks, then the next phrase starts typing.
    for _ in 0..3 {
        tick(&mut engine);
    }
    assert_eq!(engine.typing().phase(), TypingPhase::Typing);
    for _ in 0..4 {
        tick(&mut engine);
    }
    assert_eq!(engine.typing().visible(), "Ok", "second phrase typed next");
}

#[test]
fn phrases_wrap_around_the_list() {
    let mut engine = engine_with(text_config());
    // One full cycle of "Hi!" (6 + 4 + 3 + 3) and of "Ok" (4 + 4 + 2 + 3).
    for _ in 0..16 {
        tick(&mut engine);
    }
    for _ in 0..13 {
        tick(&mut engine);
    }
    // Back to the first phrase.
    for _ in 0..6 {
        tick(&mut engine);
    }
    assert_eq!(engine.typing().visible(), "Hi!");
}

#[test]
fn typing_text_changed_reports_once_per_change() {
    let mut engine = engine_with(text_config());
    // Construction leaves the initial empty text unreported.
    assert_eq!(engine.typing_text_changed(), Some(""));
    assert_eq!(engine.typing_text_changed(), None);

    tick(&mut engine);
    assert_eq!(engine.typing_text_changed(), None, "no new char yet");
    tick(&mut engine);
    assert_eq!(engine.typing_text_changed(), Some("H"));
    assert_eq!(engine.typing_text_changed(), None, "consumed");
}

#[test]
fn typing_handles_multibyte_text() {
    let mut cfg = text_config();
    cfg.typing.phrases = vec!["héllo ✨".to_string()];
    cfg.typing.type_ticks_per_char = 1;
    let mut engine = engine_with(cfg);
    let mut seen = Vec::new();
    for _ in 0..7 {
        tick(&mut engine);
        seen.push(engine.typing().visible().to_string());
    }
    assert_eq!(
        seen,
        vec!["h", "hé", "hél", "héll", "héllo", "héllo ", "héllo ✨"]
    );
}

#[test]
fn glitch_scrambles_only_inside_the_window_and_restores() {
    let mut cfg = text_config();
    cfg.glitch.interval_ticks = 10;
    cfg.glitch.window_ticks = 5;
    cfg.glitch.intensity = 1.0;
    let mut engine = engine_with(cfg);
    engine.set_glitch_base("SYSTEM ONLINE");

    // Quiet stretch: cycle positions 1..=9 stay untouched.
    for t in 1..10 {
        tick(&mut engine);
        assert_eq!(
            engine.glitch().current(),
            "SYSTEM ONLINE",
            "scrambled during the quiet stretch (tick {t})"
        );
    }
    // Window: positions 10..=14 scramble every non-space character.
    let mut scrambled_ticks = 0;
    for _ in 0..5 {
        tick(&mut engine);
        let out = engine.glitch().current();
        assert_eq!(out.chars().count(), "SYSTEM ONLINE".chars().count());
        assert_eq!(
            out.chars().nth(6),
            Some(' '),
            "whitespace survives scrambling"
        );
        if out != "SYSTEM ONLINE" {
            scrambled_ticks += 1;
        }
    }
    assert!(
        scrambled_ticks >= 4,
        "full intensity should visibly scramble nearly every window tick"
    );
    // First tick past the window restores the base text.
    tick(&mut engine);
    assert_eq!(engine.glitch().current(), "SYSTEM ONLINE");
}

#[test]
fn glitch_with_no_base_text_stays_silent() {
    let mut engine = engine_with(text_config());
    for _ in 0..500 {
        tick(&mut engine);
    }
    assert_eq!(engine.glitch().current(), "");
    assert_eq!(engine.glitch_text_changed(), None);
}
