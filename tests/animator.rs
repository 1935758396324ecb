use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;

use globevis_rs::animation::{GlobeAnimator, HomingState};
use globevis_rs::camera::OrbitControls;
use globevis_rs::model::{GlobeModel, INITIAL_YAW};
use nalgebra_glm as glm;

#[test]
fn light_rides_on_the_camera() {
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);
    animator.capture_home();

    animator.on_interaction_start();
    orbit.begin_drag();
    orbit.apply_drag(200.0, -120.0, 600.0);
    for _ in 0..50 {
        let frame = animator.tick(&mut orbit, None);
        assert_eq!(frame.light_position, frame.camera.position);
    }
}

#[test]
fn homing_lands_in_the_frame_it_steps() {
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);
    animator.capture_home();
    let home = animator.home().unwrap();

    // Drag away, then let the orbit inertia drain while the user still holds.
    animator.on_interaction_start();
    orbit.begin_drag();
    orbit.apply_drag(300.0, 150.0, 600.0);
    orbit.end_drag();
    for _ in 0..2000 {
        let _ = animator.tick(&mut orbit, None);
    }
    let displaced = glm::distance(&animator.camera().position, &home);
    assert!(displaced > 0.5, "drag only displaced the camera by {displaced}");

    // Release: every frame handed to the renderer is strictly closer to home.
    animator.on_interaction_end();
    let mut dist = displaced;
    let mut ticks = 0;
    while animator.is_returning() {
        let frame = animator.tick(&mut orbit, None);
        let next = glm::distance(&frame.camera.position, &home);
        if animator.is_returning() {
            assert!(next < dist, "tick {ticks}: distance rose from {dist} to {next}");
        }
        dist = next;
        ticks += 1;
        assert!(ticks < 400, "return did not converge in 400 ticks");
    }
    assert_eq!(animator.camera().position, home);
    assert_eq!(animator.homing_state(), HomingState::Idle);
}

#[test]
fn interaction_gates_the_return() {
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);
    animator.capture_home();
    let home = animator.home().unwrap();

    animator.on_interaction_start();
    orbit.begin_drag();
    orbit.apply_drag(250.0, 0.0, 600.0);
    orbit.end_drag();
    for _ in 0..2000 {
        let _ = animator.tick(&mut orbit, None);
    }
    let held = animator.camera().position;
    assert!(glm::distance(&held, &home) > 0.5);

    // Still held: no homing motion at all.
    for _ in 0..20 {
        let frame = animator.tick(&mut orbit, None);
        assert_eq!(frame.camera.position, held);
    }
    assert_eq!(animator.homing_state(), HomingState::Idle);
}

#[test]
fn no_home_on_record_means_no_camera_motion() {
    // A failed load never captures home, so the reset request must be inert.
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let start = animator.camera().position;

    animator.request_return();
    for _ in 0..20 {
        let frame = animator.tick(&mut orbit, None);
        assert_eq!(frame.camera.position, start);
    }
    assert_eq!(animator.home(), None);
}

#[test]
fn settle_needs_a_globe_and_then_runs_to_one_turn() {
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);

    // No globe yet: the settler must not advance.
    for _ in 0..10 {
        let _ = animator.tick(&mut orbit, None);
    }
    assert_eq!(animator.settler().progress(), 0.0);

    let mut globe = GlobeModel::new();
    assert_eq!(globe.yaw(), INITIAL_YAW);

    let mut ticks = 0;
    while !animator.settler().is_complete() {
        let _ = animator.tick(&mut orbit, Some(&mut globe));
        ticks += 1;
        assert!(ticks < 400, "settle did not complete in 400 ticks");
    }
    assert!(
        (globe.yaw() - (INITIAL_YAW + TAU)).abs() < 1e-3,
        "settled yaw = {}",
        globe.yaw()
    );

    // Complete is terminal: the yaw freezes.
    let settled = globe.yaw();
    for _ in 0..10 {
        let _ = animator.tick(&mut orbit, Some(&mut globe));
    }
    assert_eq!(globe.yaw(), settled);
}

#[test]
fn settle_finishing_notice_fires_exactly_once() {
    let fired = Rc::new(Cell::new(0u32));
    let mut animator = GlobeAnimator::new();
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let f = fired.clone();
    animator.on_settle_finishing(move || f.set(f.get() + 1));

    let mut globe = GlobeModel::new();
    let mut fired_before_complete = false;
    for _ in 0..400 {
        let _ = animator.tick(&mut orbit, Some(&mut globe));
        if fired.get() == 1 && !animator.settler().is_complete() {
            fired_before_complete = true;
        }
    }
    assert!(animator.settler().is_complete());
    assert_eq!(fired.get(), 1);
    assert!(fired_before_complete, "notice arrived only at completion");
}
