use std::f32::consts::TAU;

use crate::renderer::vertex::LineVertex;

/// Degrees between graticule lines.
const GRID_STEP_DEG: i32 = 15;
/// Segments per circle; enough that the lines read as smooth curves.
const CIRCLE_SEGMENTS: u32 = 96;
/// Lift above the sphere surface to keep the lines out of the depth fight.
const SURFACE_LIFT: f32 = 1.002;

/// Latitude/longitude reference lines as a line list, rotating with the
/// globe. The equator and the prime-meridian circle use the major color.
pub fn build_graticule(
    radius: f32,
    major_color: [f32; 3],
    minor_color: [f32; 3],
) -> Vec<LineVertex> {
    let r = radius * SURFACE_LIFT;
    let mut lines = Vec::new();

    // Parallels, poles excluded.
    let mut lat = -90 + GRID_STEP_DEG;
    while lat < 90 {
        let color = if lat == 0 { major_color } else { minor_color };
        let polar = ((90 - lat) as f32).to_radians();
        push_circle(&mut lines, color, |t| {
            let azimuth = t * TAU;
            [
                r * polar.sin() * azimuth.sin(),
                r * polar.cos(),
                r * polar.sin() * azimuth.cos(),
            ]
        });
        lat += GRID_STEP_DEG;
    }

    // Meridians, each a full great circle through both poles.
    let mut lon = 0;
    while lon < 180 {
        let color = if lon == 0 { major_color } else { minor_color };
        let azimuth = (lon as f32).to_radians();
        push_circle(&mut lines, color, |t| {
            let polar = t * TAU;
            [
                r * polar.sin() * azimuth.sin(),
                r * polar.cos(),
                r * polar.sin() * azimuth.cos(),
            ]
        });
        lon += GRID_STEP_DEG;
    }

    lines
}

fn push_circle(
    lines: &mut Vec<LineVertex>,
    color: [f32; 3],
    point_at: impl Fn(f32) -> [f32; 3],
) {
    for segment in 0..CIRCLE_SEGMENTS {
        let t0 = segment as f32 / CIRCLE_SEGMENTS as f32;
        let t1 = (segment + 1) as f32 / CIRCLE_SEGMENTS as f32;
        lines.push(LineVertex {
            position: point_at(t0),
            color,
        });
        lines.push(LineVertex {
            position: point_at(t1),
            color,
        });
    }
}
