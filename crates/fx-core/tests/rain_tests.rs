// Matrix rain: column layout from the viewport, one streak per column,
// expiry past the bottom edge, respawn only into empty columns.

use fx_core::{EffectEngine, EffectEvent, EffectsConfig, Viewport};

fn rain_only_config() -> EffectsConfig {
    let mut cfg = EffectsConfig::default();
    cfg.orbs.min_count = 0;
    cfg.orbs.max_count = 0;
    cfg.particles.ambient_spawn_probability = 0.0;
    cfg
}

fn engine_with(cfg: EffectsConfig, viewport: Viewport) -> EffectEngine {
    EffectEngine::new(cfg, viewport, 99).unwrap()
}

fn tick(engine: &mut EffectEngine) -> Vec<EffectEvent> {
    let mut events = Vec::new();
    engine.tick(&mut events);
    events
}

#[test]
fn column_count_follows_viewport_width() {
    let mut cfg = rain_only_config();
    cfg.rain.column_width = 20.0;
    let engine = engine_with(cfg.clone(), Viewport::new(800.0, 600.0));
    assert_eq!(engine.rain().columns(), 40);

    let engine = engine_with(cfg, Viewport::new(10.0, 600.0));
    assert_eq!(engine.rain().columns(), 1, "at least one column always");
}

#[test]
fn first_tick_floods_columns_then_respawn_is_gradual() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.respawn_probability = 0.0;
    let mut engine = engine_with(cfg, Viewport::new(400.0, 300.0));
    assert!(engine.rain().is_empty(), "pools populate on the first tick");

    let events = tick(&mut engine);
    let spawned = events
        .iter()
        .filter(|e| matches!(e, EffectEvent::StreakSpawned { .. }))
        .count();
    assert_eq!(spawned as u32, engine.rain().columns());
    assert_eq!(engine.rain().len() as u32, engine.rain().columns());

    // With respawn off, nothing new after the flood.
    let events = tick(&mut engine);
    assert!(!events
        .iter()
        .any(|e| matches!(e, EffectEvent::StreakSpawned { .. })));
}

#[test]
fn at_most_one_streak_per_column() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.respawn_probability = 1.0;
    let mut engine = engine_with(cfg, Viewport::new(360.0, 240.0));
    for t in 0..600 {
        tick(&mut engine);
        let mut seen = vec![false; engine.rain().columns() as usize];
        for streak in engine.rain().iter() {
            let col = streak.column as usize;
            assert!(!seen[col], "two streaks share column {col} at tick {t}");
            seen[col] = true;
        }
    }
}

#[test]
fn streaks_fall_and_expire_below_the_viewport() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.respawn_probability = 0.0;
    let viewport = Viewport::new(200.0, 150.0);
    let mut engine = engine_with(cfg, viewport);
    tick(&mut engine);
    let initial = engine.rain().len();
    assert!(initial > 0);

    let mut expired = 0;
    // Slowest default streak clears a 150 px viewport well inside 600 ticks.
    for _ in 0..600 {
        for event in tick(&mut engine) {
            if matches!(event, EffectEvent::StreakExpired { .. }) {
                expired += 1;
            }
        }
        for streak in engine.rain().iter() {
            let top = engine.rain().top_y(streak);
            assert!(
                top <= viewport.height,
                "streak should have expired before its top passed the bottom"
            );
        }
    }
    assert_eq!(expired, initial, "every seeded streak eventually falls out");
    assert!(engine.rain().is_empty());
}

#[test]
fn streak_glyphs_stay_within_configured_length() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.len_min = 5;
    cfg.rain.len_max = 9;
    let mut engine = engine_with(cfg, Viewport::new(500.0, 400.0));
    for _ in 0..120 {
        tick(&mut engine);
        for streak in engine.rain().iter() {
            assert!((5..=9).contains(&streak.len()));
            let text = streak.text();
            assert_eq!(text.lines().count(), streak.len());
        }
    }
}

#[test]
fn heads_advance_every_tick() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.respawn_probability = 0.0;
    let mut engine = engine_with(cfg, Viewport::new(300.0, 4000.0));
    tick(&mut engine);
    let before: Vec<(u32, f32)> = engine
        .rain()
        .iter()
        .map(|s| (s.column, s.head_y))
        .collect();
    tick(&mut engine);
    for ((col, was), streak) in before.iter().zip(engine.rain().iter()) {
        assert_eq!(*col, streak.column, "expiry-free tick keeps order");
        assert!(streak.head_y > *was, "head must fall every tick");
    }
}

#[test]
fn narrowing_the_viewport_drops_out_of_range_columns() {
    let mut cfg = rain_only_config();
    cfg.rain.fill_probability = 1.0;
    cfg.rain.respawn_probability = 0.0;
    cfg.rain.column_width = 20.0;
    let mut engine = engine_with(cfg, Viewport::new(800.0, 600.0));
    tick(&mut engine);
    assert_eq!(engine.rain().len(), 40);

    engine.set_viewport(200.0, 600.0);
    let events = tick(&mut engine);
    assert_eq!(engine.rain().columns(), 10);
    let dropped = events
        .iter()
        .filter(|e| matches!(e, EffectEvent::StreakExpired { .. }))
        .count();
    assert_eq!(dropped, 30, "streaks past column 10 drop immediately");
    for streak in engine.rain().iter() {
        assert!(streak.column < 10);
    }
}
