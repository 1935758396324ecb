/// Square render-area side for a window of the given size.
///
/// Portrait windows derive the side from the width, with a tighter divisor
/// below 600 px so the globe still fills narrow screens; landscape windows
/// use half the height. Width equal to height counts as landscape.
pub fn fit_square(width: f32, height: f32) -> f32 {
    if width < height {
        if width < 600.0 { width / 1.2 } else { width / 1.5 }
    } else {
        height * 0.5
    }
}

/// Centered square viewport `(x, y, side)` for the given window size. The
/// side never exceeds either window dimension, so the rect always fits.
pub fn square_viewport(width: f32, height: f32) -> (f32, f32, f32) {
    let side = fit_square(width, height);
    ((width - side) * 0.5, (height - side) * 0.5, side)
}
