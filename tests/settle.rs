use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;

use globevis_rs::animation::settle::{
    NOTIFY_EPSILON, RotationSettler, SETTLE_TARGET, SNAP_EPSILON, SettlePhase,
};

#[test]
fn progress_is_monotone_and_bounded() {
    let mut settler = RotationSettler::new();
    let mut last_progress = settler.progress();
    let mut last_delta = f32::INFINITY;
    let mut ticks = 0;
    while !settler.is_complete() {
        let delta = settler.advance().expect("running settler yields a delta");
        assert!(delta > 0.0, "tick {ticks}: delta = {delta}");
        let p = settler.progress();
        assert!(p > last_progress, "tick {ticks}: progress fell back to {p}");
        assert!(p <= SETTLE_TARGET, "tick {ticks}: progress {p} overshot");
        last_progress = p;
        last_delta = delta;
        ticks += 1;
        assert!(ticks < 400, "settle did not complete in 400 ticks");
    }
    assert_eq!(settler.progress(), SETTLE_TARGET);
    // The last delta is the snap, closing no more than the snap threshold.
    assert!(last_delta <= SNAP_EPSILON, "snap delta = {last_delta}");
}

#[test]
fn finishing_notice_fires_once_strictly_before_completion() {
    let fired = Rc::new(Cell::new(0u32));
    let mut settler = RotationSettler::new();
    let f = fired.clone();
    settler.on_finishing(move || f.set(f.get() + 1));

    let mut remaining_at_fire = f32::NAN;
    let mut ticks = 0;
    while !settler.is_complete() {
        let before = SETTLE_TARGET - settler.progress();
        let _ = settler.advance();
        if fired.get() == 1 && remaining_at_fire.is_nan() {
            remaining_at_fire = before;
            assert!(!settler.is_complete(), "notice must precede completion");
            assert_eq!(settler.phase(), SettlePhase::Finishing);
        }
        ticks += 1;
        assert!(ticks < 400);
    }

    assert_eq!(fired.get(), 1, "finishing notice fired more than once");
    assert!(
        remaining_at_fire < NOTIFY_EPSILON,
        "fired with {remaining_at_fire} rad left, threshold {NOTIFY_EPSILON}"
    );
}

#[test]
fn terminal_snap_lands_exactly_and_freezes() {
    let mut settler = RotationSettler::new();
    let mut yaw = 0.0f32;
    let mut ticks = 0;
    while let Some(delta) = settler.advance() {
        yaw += delta;
        ticks += 1;
        assert!(ticks < 400, "settle did not complete in 400 ticks");
    }
    assert!(
        (yaw - TAU).abs() < 1e-3,
        "summed deltas = {yaw}, want one full turn"
    );

    // Complete is terminal: further ticks yield nothing and move nothing.
    for _ in 0..8 {
        assert_eq!(settler.advance(), None);
    }
    assert_eq!(settler.progress(), SETTLE_TARGET);
    assert_eq!(settler.phase(), SettlePhase::Complete);
}
