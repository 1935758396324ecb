use globevis_rs::camera::{CameraState, OrbitControls};
use nalgebra_glm as glm;

#[test]
fn no_pending_rotation_leaves_the_camera_untouched() {
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let mut camera = CameraState::default();
    let start = camera.position;
    for _ in 0..5 {
        orbit.update(&mut camera);
    }
    assert_eq!(camera.position, start);
}

#[test]
fn drag_requires_begin_drag() {
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let mut camera = CameraState::default();
    let start = camera.position;
    orbit.apply_drag(50.0, 30.0, 600.0);
    orbit.update(&mut camera);
    assert_eq!(camera.position, start, "deltas accumulated outside a drag");
}

#[test]
fn orbit_preserves_radius_and_eases_to_rest() {
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let mut camera = CameraState::default();
    let radius = glm::length(&camera.position);

    orbit.begin_drag();
    orbit.apply_drag(120.0, 80.0, 600.0);
    orbit.end_drag();

    let mut moved = false;
    for tick in 0..2000 {
        let before = camera.position;
        orbit.update(&mut camera);
        if camera.position != before {
            moved = true;
        }
        let r = glm::length(&camera.position);
        assert!((r - radius).abs() < 1e-3, "tick {tick}: radius drifted to {r}");
    }
    assert!(moved, "pending drag never reached the camera");

    // The damping has spent the pending rotation by now.
    let settled = camera.position;
    orbit.update(&mut camera);
    assert_eq!(camera.position, settled);
}

#[test]
fn drag_down_raises_the_camera() {
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let mut camera = CameraState::default();
    orbit.begin_drag();
    orbit.apply_drag(0.0, 40.0, 600.0);
    orbit.update(&mut camera);
    assert!(camera.position.y > 0.0, "y = {}", camera.position.y);
}

#[test]
fn drag_right_swings_the_camera_west() {
    let mut orbit = OrbitControls::new(0.2, 0.02);
    let mut camera = CameraState::default();
    orbit.begin_drag();
    orbit.apply_drag(40.0, 0.0, 600.0);
    orbit.update(&mut camera);
    assert!(camera.position.x < 0.0, "x = {}", camera.position.x);
}

#[test]
fn pitch_clamp_survives_violent_drags() {
    let mut orbit = OrbitControls::new(1.0, 0.2);
    let mut camera = CameraState::default();
    let radius = glm::length(&camera.position);

    orbit.begin_drag();
    orbit.apply_drag(0.0, 1.0e6, 600.0);
    for _ in 0..500 {
        orbit.update(&mut camera);
        assert!(camera.position.iter().all(|c| c.is_finite()));
        assert!(
            camera.position.y.abs() <= radius + 1e-4,
            "camera crossed the pole: y = {}",
            camera.position.y
        );
    }
    let r = glm::length(&camera.position);
    assert!((r - radius).abs() < 1e-2, "radius drifted to {r}");
}
