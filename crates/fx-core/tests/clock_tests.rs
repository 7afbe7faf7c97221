// Fixed-timestep accumulator behavior: whole ticks out, fractional time
// carried, catch-up capped after stalls.

use std::time::Duration;

use fx_core::TickClock;

#[test]
fn exact_frame_yields_one_tick() {
    let mut clock = TickClock::new(60.0, 4);
    let due = clock.advance(Duration::from_secs_f32(1.0 / 60.0));
    assert_eq!(due, 1);
}

#[test]
fn short_frames_accumulate_into_ticks() {
    let mut clock = TickClock::new(60.0, 4);
    // Three 100 Hz frames hold 1.8 ticks of time.
    let mut total = 0;
    for _ in 0..3 {
        total += clock.advance(Duration::from_millis(10));
    }
    assert_eq!(total, 1, "30 ms at 60 Hz is one whole tick");
    // The fractional remainder carries into the next frame.
    total += clock.advance(Duration::from_millis(10));
    assert_eq!(total, 2);
}

#[test]
fn split_deltas_match_one_big_delta_under_cap() {
    let mut split = TickClock::new(60.0, 100);
    let mut whole = TickClock::new(60.0, 100);

    let mut split_ticks = 0;
    for _ in 0..10 {
        split_ticks += split.advance(Duration::from_millis(5));
    }
    let whole_ticks = whole.advance(Duration::from_millis(50));
    assert_eq!(
        split_ticks, whole_ticks,
        "tick count must not depend on how the same time was delivered"
    );
}

#[test]
fn stall_is_capped_and_excess_dropped() {
    let mut clock = TickClock::new(60.0, 4);
    // Five seconds away would be 300 ticks; the cap takes 4 and drops the rest.
    assert_eq!(clock.advance(Duration::from_secs(5)), 4);
    // The dropped time is not owed later.
    assert_eq!(clock.advance(Duration::ZERO), 0);
    assert_eq!(
        clock.advance(Duration::from_millis(17)),
        1,
        "an ordinary frame after a stall is an ordinary tick"
    );
}

#[test]
fn zero_delta_yields_no_ticks() {
    let mut clock = TickClock::new(60.0, 4);
    assert_eq!(clock.advance(Duration::ZERO), 0);
    assert_eq!(clock.advance(Duration::ZERO), 0);
}

#[test]
fn tick_seconds_reflects_rate() {
    let clock = TickClock::new(60.0, 4);
    assert!((clock.tick_seconds() - 1.0 / 60.0).abs() < 1e-6);
}
