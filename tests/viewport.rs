use globevis_rs::renderer::{fit_square, square_viewport};

#[test]
fn portrait_narrow_uses_the_tight_divisor() {
    assert!((fit_square(300.0, 800.0) - 250.0).abs() < 1e-3);
}

#[test]
fn portrait_wide_uses_the_loose_divisor() {
    assert!((fit_square(1000.0, 1200.0) - 666.6667).abs() < 1e-2);
}

#[test]
fn landscape_takes_half_the_height() {
    assert!((fit_square(1200.0, 800.0) - 400.0).abs() < 1e-6);
}

#[test]
fn square_window_counts_as_landscape() {
    assert!((fit_square(700.0, 700.0) - 350.0).abs() < 1e-6);
}

#[test]
fn viewport_is_centered_and_fits() {
    let (x, y, side) = square_viewport(1200.0, 800.0);
    assert_eq!((x, y, side), (400.0, 200.0, 400.0));

    let windows = [(300.0, 800.0), (1000.0, 1200.0), (1200.0, 800.0), (256.0, 256.0)];
    for (w, h) in windows {
        let (x, y, side) = square_viewport(w, h);
        assert!(side <= w && side <= h, "{w}x{h}: side {side} spills over");
        assert!(x >= 0.0 && y >= 0.0);
        assert!((2.0 * x + side - w).abs() < 1e-3, "{w}x{h}: not centered in x");
        assert!((2.0 * y + side - h).abs() < 1e-3, "{w}x{h}: not centered in y");
    }
}
