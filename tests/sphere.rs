use globevis_rs::model::{
    GLOBE_RADIUS, GlobeModel, INITIAL_YAW, SPHERE_RINGS, SPHERE_SEGMENTS, build_graticule,
    build_sphere,
};

#[test]
fn sphere_counts_and_seam_column() {
    let (vertices, indices) = build_sphere(2.8, 64, 32);
    assert_eq!(vertices.len(), (32 + 1) * (64 + 1));
    assert_eq!(indices.len(), 32 * 64 * 6);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

    // The seam column duplicates positions so the texture wraps cleanly.
    let stride = 64 + 1;
    for ring in 0..=32usize {
        let first = &vertices[ring * stride];
        let last = &vertices[ring * stride + 64];
        for k in 0..3 {
            assert!(
                (first.position[k] - last.position[k]).abs() < 1e-3,
                "ring {ring}: seam positions diverge"
            );
        }
        assert!((first.uv[0] - 0.0).abs() < 1e-6);
        assert!((last.uv[0] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn sphere_vertices_sit_on_the_sphere() {
    let (vertices, _) = build_sphere(2.8, 16, 8);
    for v in &vertices {
        let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
        assert!((r - 2.8).abs() < 1e-3, "vertex radius {r}");
        let n = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
        assert!((n - 1.0).abs() < 1e-3, "normal length {n}");
        for k in 0..3 {
            assert!(
                (v.position[k] - 2.8 * v.normal[k]).abs() < 1e-3,
                "normal is not radial"
            );
        }
        assert!(v.uv[0] >= 0.0 && v.uv[0] <= 1.0);
        assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
    }
}

#[test]
fn globe_model_starts_at_the_initial_yaw() {
    let mut globe = GlobeModel::new();
    assert_eq!(globe.yaw(), INITIAL_YAW);
    assert_eq!(
        globe.vertices.len() as u32,
        (SPHERE_RINGS + 1) * (SPHERE_SEGMENTS + 1)
    );

    globe.apply_yaw(0.25);
    globe.apply_yaw(0.25);
    assert!((globe.yaw() - (INITIAL_YAW + 0.5)).abs() < 1e-6);
}

#[test]
fn graticule_lines_sit_just_above_the_surface() {
    let major = [0.9, 0.9, 0.9];
    let minor = [0.45, 0.45, 0.45];
    let lines = build_graticule(GLOBE_RADIUS, major, minor);

    assert!(!lines.is_empty());
    assert_eq!(lines.len() % 2, 0, "a line list needs vertex pairs");

    let mut saw_major = false;
    let mut saw_minor = false;
    for v in &lines {
        let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
        // Lifted off the surface against depth fighting, but only just.
        assert!(r > GLOBE_RADIUS, "graticule vertex touches the surface");
        assert!(r < GLOBE_RADIUS * 1.01, "graticule vertex floats away: {r}");
        if v.color == major {
            saw_major = true;
        }
        if v.color == minor {
            saw_minor = true;
        }
    }
    assert!(saw_major, "equator and prime meridian use the major color");
    assert!(saw_minor);
}
