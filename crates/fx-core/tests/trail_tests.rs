// Follower and trail-ring behavior driven through the public engine API.

use fx_core::{EffectEngine, EffectEvent, EffectsConfig, Viewport};
use glam::Vec2;

// Decorative pools silenced so counts in here are all trail-made.
fn quiet_config() -> EffectsConfig {
    let mut cfg = EffectsConfig::default();
    cfg.orbs.min_count = 0;
    cfg.orbs.max_count = 0;
    cfg.rain.fill_probability = 0.0;
    cfg.rain.respawn_probability = 0.0;
    cfg.particles.ambient_spawn_probability = 0.0;
    cfg
}

fn engine_with(cfg: EffectsConfig) -> EffectEngine {
    EffectEngine::new(cfg, Viewport::new(1280.0, 720.0), 7).unwrap()
}

fn tick(engine: &mut EffectEngine) -> Vec<EffectEvent> {
    let mut events = Vec::new();
    engine.tick(&mut events);
    events
}

#[test]
fn follower_snaps_to_first_sample() {
    let mut engine = engine_with(quiet_config());
    assert!(!engine.follower().active());
    engine.on_pointer_move(400.0, 250.0);
    assert!(engine.follower().active());
    assert_eq!(engine.follower().position(), Vec2::new(400.0, 250.0));
}

#[test]
fn follower_converges_monotonically_without_overshoot() {
    let mut engine = engine_with(quiet_config());
    engine.on_pointer_move(0.0, 0.0);
    tick(&mut engine);
    // Retarget far away; the follower now has real distance to close.
    let target = Vec2::new(600.0, 400.0);
    engine.on_pointer_move(target.x, target.y);

    let mut prev = engine.follower().position().distance(target);
    assert!(prev > 0.0);
    for i in 0..100 {
        tick(&mut engine);
        let d = engine.follower().position().distance(target);
        assert!(d < prev, "distance grew on tick {i}: {d} >= {prev}");
        prev = d;
    }
    assert!(prev < 1.0, "follower should be pixel-close inside two seconds");
}

#[test]
fn pointer_leave_freezes_the_follower() {
    let mut engine = engine_with(quiet_config());
    engine.on_pointer_move(100.0, 100.0);
    engine.on_pointer_move(900.0, 500.0);
    tick(&mut engine);
    engine.on_pointer_leave();
    assert!(!engine.follower().active());
    let parked = engine.follower().position();
    for _ in 0..10 {
        tick(&mut engine);
    }
    assert_eq!(engine.follower().position(), parked);
    // Re-entry snaps to the new sample rather than sweeping across.
    engine.on_pointer_move(50.0, 50.0);
    assert_eq!(engine.follower().position(), Vec2::new(50.0, 50.0));
}

#[test]
fn trail_never_exceeds_capacity_and_evicts_oldest() {
    let mut cfg = quiet_config();
    cfg.trail.capacity = 5;
    cfg.trail.min_gap_ticks = 1;
    let mut engine = engine_with(cfg);

    let mut spawned = Vec::new();
    let mut evicted = Vec::new();
    for i in 0..20 {
        engine.on_pointer_move(10.0 * i as f32, 5.0 * i as f32);
        for event in tick(&mut engine) {
            match event {
                EffectEvent::TrailSpawned { id, .. } => spawned.push(id),
                EffectEvent::TrailEvicted { id } => evicted.push(id),
                _ => {}
            }
        }
        assert!(
            engine.trail().len() <= 5,
            "trail exceeded capacity on sample {i}"
        );
    }
    assert_eq!(spawned.len(), 20);
    assert_eq!(evicted.len(), 15);
    // Evictions happen strictly oldest-first.
    assert_eq!(evicted, spawned[..15].to_vec());
}

#[test]
fn samples_inside_throttle_window_are_dropped() {
    let mut cfg = quiet_config();
    cfg.trail.min_gap_ticks = 3;
    let mut engine = engine_with(cfg);

    engine.on_pointer_move(10.0, 10.0);
    engine.on_pointer_move(20.0, 20.0);
    engine.on_pointer_move(30.0, 30.0);
    assert_eq!(engine.trail().len(), 1, "same-tick repeats collapse to one");

    tick(&mut engine);
    tick(&mut engine);
    engine.on_pointer_move(40.0, 40.0);
    assert_eq!(engine.trail().len(), 1, "two ticks is still inside the window");

    tick(&mut engine);
    engine.on_pointer_move(50.0, 50.0);
    assert_eq!(engine.trail().len(), 2, "third tick reopens the window");
}

#[test]
fn trail_points_close_on_the_pointer() {
    let mut cfg = quiet_config();
    cfg.trail.min_gap_ticks = 1;
    let mut engine = engine_with(cfg);

    for i in 0..8 {
        engine.on_pointer_move(100.0 * i as f32, 60.0 * i as f32);
        tick(&mut engine);
    }
    let target = engine.follower().target();
    let far: Vec<f32> = engine
        .trail()
        .iter()
        .map(|p| p.position.distance(target))
        .collect();
    for _ in 0..120 {
        tick(&mut engine);
    }
    for (i, p) in engine.trail().iter().enumerate() {
        let d = p.position.distance(target);
        assert!(
            d <= far[i] + 1e-4,
            "point {i} moved away from the pointer ({d} > {})",
            far[i]
        );
        assert!(d < 40.0, "point {i} still {d} px out after 2 s");
    }
}

#[test]
fn spawn_events_arrive_on_the_next_tick() {
    let mut engine = engine_with(quiet_config());
    engine.on_pointer_move(64.0, 64.0);
    // Mutation is visible immediately, the event only at the next tick.
    assert_eq!(engine.trail().len(), 1);
    let events = tick(&mut engine);
    assert!(events
        .iter()
        .any(|e| matches!(e, EffectEvent::TrailSpawned { .. })));
    let events = tick(&mut engine);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, EffectEvent::TrailSpawned { .. })),
        "events must not repeat"
    );
}
