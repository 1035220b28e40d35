//! Pad silhouette generation.
//!
//! Each qualifying pad is cut as a closed polyline: either a 4-vertex
//! outline or, for rounded pads with corner cutting enabled, an
//! 8-vertex octagon. Corner cutting happens in local pad space; the
//! finished point set is then rotated by the pad angle and translated
//! to the pad center.

/// Effective corner-cut radius for a pad.
///
/// The configured floor only applies to pads that are actually rounded,
/// so `roundness == 0` always takes the 4-vertex path.
pub fn corner_radius(w: f64, h: f64, roundness: u8, min_radius: f64) -> f64 {
    let r = w.min(h) * f64::from(roundness) / 100.0;
    if roundness > 0 {
        r.max(min_radius)
    } else {
        r
    }
}

/// Compute the closed cut outline for one pad.
///
/// `x`/`y` is the pad center and `w`/`h` the shrink-reduced half-extents,
/// all already unit-scaled; `angle` is in radians. The returned sequence
/// is the full vertex run emitted to the plotter: the base outline
/// repeated `cut_times` times (literal duplicate passes), closed by
/// repeating the first point, so its length is `n * cut_times + 1`.
///
/// Degenerate half-extents produce degenerate polygons, never errors.
pub fn pad_silhouette(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    angle: f64,
    roundness: u8,
    min_radius: f64,
    corner_cut: bool,
    cut_times: u32,
) -> Vec<[f64; 2]> {
    let r = corner_radius(w, h, roundness, min_radius);

    let local: Vec<[f64; 2]> = if corner_cut && r > 0.0 && w > r && h > r {
        // Rectangle corners (±w, ±h), each split into two points pulled
        // inward by r along one axis. Counter-clockwise from (w, h-r).
        vec![
            [w, h - r],
            [w - r, h],
            [-w + r, h],
            [-w, h - r],
            [-w, -h + r],
            [-w + r, -h],
            [w - r, -h],
            [w, -h + r],
        ]
    } else {
        // Legacy 4-vertex outline: (w,0), (0,h), (-w,0), (0,-h) in local
        // space. Kept exactly for compatibility with existing stencils.
        vec![[w, 0.0], [0.0, h], [-w, 0.0], [0.0, -h]]
    };

    let (sin_a, cos_a) = angle.sin_cos();
    let rotate = |p: &[f64; 2]| {
        [
            x + p[0] * cos_a - p[1] * sin_a,
            y + p[0] * sin_a + p[1] * cos_a,
        ]
    };

    let mut points = Vec::with_capacity(local.len() * cut_times as usize + 1);
    for _ in 0..cut_times {
        points.extend(local.iter().map(|p| rotate(p)));
    }
    // Closing vertex; the serializer also sets the closed flag.
    points.push(rotate(&local[0]));
    points
}
