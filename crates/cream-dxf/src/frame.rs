//! Alignment frame around one layer's silhouettes.
//!
//! The frame has fixed configured dimensions centered on the layer
//! bounding box; only its position depends on the pads. Corners are
//! either square or mitred with a 45-degree cut of fixed length.

/// Line segments `[x1, y1, x2, y2]` forming the frame border.
///
/// `cx`/`cy` is the frame center and `width`/`height` its full outer
/// dimensions, all pre-scaled. With `mitre` set, each side is shortened
/// by the mitre length at both ends and joined to its neighbor by a
/// diagonal of the same length; sides proceed bottom, right, top, left.
///
/// A mitre length over half the shorter dimension produces crossed
/// segments; dimensions are not validated here.
pub fn frame_segments(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    mitre: Option<f64>,
) -> Vec<[f64; 4]> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let (x0, y0) = (cx - hw, cy - hh);
    let (x1, y1) = (cx + hw, cy + hh);

    match mitre {
        None => vec![
            [x0, y0, x1, y0], // bottom
            [x1, y0, x1, y1], // right
            [x1, y1, x0, y1], // top
            [x0, y1, x0, y0], // left
        ],
        Some(m) => vec![
            [x0 + m, y0, x1 - m, y0], // bottom
            [x1 - m, y0, x1, y0 + m],
            [x1, y0 + m, x1, y1 - m], // right
            [x1, y1 - m, x1 - m, y1],
            [x1 - m, y1, x0 + m, y1], // top
            [x0 + m, y1, x0, y1 - m],
            [x0, y1 - m, x0, y0 + m], // left
            [x0, y0 + m, x0 + m, y0],
        ],
    }
}
