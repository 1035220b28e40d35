//! Per-layer export driver.
//!
//! One pass per physical layer: header, one closed polyline per
//! qualifying pad (updating the layer bounding box as we go), the
//! optional alignment frame once all pads are placed, then the trailer.
//! The two layer runs share configuration but nothing else.

use crate::config::Config;
use crate::dxf::{DxfWriter, Entity};
use crate::error::ExportError;
use crate::frame::frame_segments;
use crate::silhouette::pad_silhouette;
use crate::types::{BBox, Board, Side};
use log::{debug, info, warn};
use std::io::Write;

/// Pad label text height in mm, pre-scale.
const LABEL_HEIGHT: f64 = 1.0;

/// Pads written per physical layer; the run's overall result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub top: usize,
    pub bottom: usize,
}

/// Write one complete stencil document for `side` and return the
/// number of pads emitted.
pub fn export_layer<W: Write>(
    board: &Board,
    side: Side,
    config: &Config,
    out: W,
) -> Result<usize, ExportError> {
    let scale = config.unit.scale();
    let min_radius = config.min_radius * scale;

    let mut dxf = DxfWriter::new(out);
    dxf.header(config.unit)?;

    let mut bbox = BBox::empty();
    let mut count = 0usize;

    for component in &board.components {
        for pad in &component.pads {
            if pad.side != side || !pad.cream {
                continue;
            }

            let x = pad.x * scale;
            let y = pad.y * scale;
            let w = (pad.dx - config.shrink_width) * scale;
            let h = (pad.dy - config.shrink_width) * scale;

            let points = pad_silhouette(
                x,
                y,
                w,
                h,
                pad.angle.to_radians(),
                pad.roundness,
                min_radius,
                config.corner_cut,
                config.cut_times,
            );
            debug!(
                "{}.{} on {}: {} points",
                component.name,
                pad.name,
                side.as_str(),
                points.len()
            );
            dxf.entity(&Entity::Polyline {
                points,
                closed: true,
            })?;

            if config.label_pads {
                dxf.entity(&Entity::Text {
                    x,
                    y,
                    height: LABEL_HEIGHT * scale,
                    value: format!("{}.{}", component.name, pad.name),
                })?;
            }

            // The extent is tracked pre-rotation; kept for compatibility
            // with existing stencil output.
            bbox.expand(x, y, w, h);
            count += 1;
        }
    }

    if config.add_frame {
        if bbox.is_empty() {
            // The sentinel box has no usable center.
            warn!(
                "no pads on the {} layer, skipping the frame",
                side.as_str()
            );
        } else {
            let (cx, cy) = bbox.center();
            let width = (config.frame_width + config.frame_kerf) * scale;
            let height = (config.frame_height + config.frame_kerf) * scale;
            let mitre = config
                .mitre_corners
                .then_some(config.mitre_length * scale);
            for [x1, y1, x2, y2] in frame_segments(cx, cy, width, height, mitre) {
                dxf.entity(&Entity::Line { x1, y1, x2, y2 })?;
            }
        }
    }

    dxf.trailer()?;
    info!("{} layer: {} pads", side.as_str(), count);
    Ok(count)
}

/// Run the layer driver once per side into two independent documents.
pub fn export_board<T: Write, B: Write>(
    board: &Board,
    config: &Config,
    top: T,
    bottom: B,
) -> Result<ExportSummary, ExportError> {
    let top = export_layer(board, Side::Top, config, top)?;
    let bottom = export_layer(board, Side::Bottom, config, bottom)?;
    Ok(ExportSummary { top, bottom })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Unit;
    use crate::types::{Component, Pad};

    fn pad(name: &str, x: f64, y: f64, side: Side) -> Pad {
        Pad {
            name: name.to_string(),
            x,
            y,
            dx: 0.6,
            dy: 0.9,
            angle: 0.0,
            roundness: 0,
            cream: true,
            side,
        }
    }

    fn board() -> Board {
        Board {
            name: "test".to_string(),
            components: vec![
                Component {
                    name: "U1".to_string(),
                    pads: vec![
                        pad("1", 10.0, 10.0, Side::Top),
                        pad("2", 12.0, 10.0, Side::Top),
                    ],
                },
                Component {
                    name: "R1".to_string(),
                    pads: vec![pad("1", 5.0, 5.0, Side::Bottom)],
                },
            ],
        }
    }

    fn run_layer(board: &Board, side: Side, config: &Config) -> (usize, String) {
        let mut buf = Vec::new();
        let count = export_layer(board, side, config, &mut buf).unwrap();
        (count, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_counts_per_layer() {
        let board = board();
        let config = Config::default();
        let mut top = Vec::new();
        let mut bottom = Vec::new();
        let summary = export_board(&board, &config, &mut top, &mut bottom).unwrap();
        assert_eq!(summary, ExportSummary { top: 2, bottom: 1 });
    }

    #[test]
    fn test_document_structure() {
        let (count, doc) = run_layer(&board(), Side::Top, &Config::default());
        assert_eq!(count, 2);
        assert!(doc.starts_with("999\ncream-dxf\n0\nSECTION\n"));
        assert!(doc.ends_with("0\nENDSEC\n0\nEOF\n"));
        assert_eq!(doc.matches("LWPOLYLINE").count(), 2);
        assert_eq!(doc.matches("\nLINE\n").count(), 0); // no frame requested
    }

    #[test]
    fn test_cream_and_side_filters() {
        let mut board = board();
        board.components[0].pads[1].cream = false;
        let (count, doc) = run_layer(&board, Side::Top, &Config::default());
        assert_eq!(count, 1);
        assert_eq!(doc.matches("LWPOLYLINE").count(), 1);
    }

    #[test]
    fn test_cut_twice_point_count_field() {
        let config = Config {
            cut_times: 2,
            ..Config::default()
        };
        let (_, doc) = run_layer(&board(), Side::Top, &config);
        // 4 vertices x 2 passes + closing point, closed flag set.
        assert!(doc.contains("90\n9\n70\n1\n"));
    }

    #[test]
    fn test_frame_emitted_after_pads() {
        let config = Config {
            add_frame: true,
            ..Config::default()
        };
        let (_, doc) = run_layer(&board(), Side::Top, &config);
        assert_eq!(doc.matches("\nLINE\n").count(), 4);
        // Frame is centered on the pad bounding box: x spans 10 +/- 0.5
        // and 12 +/- 0.5 so the center is (11, 10).
        assert!(doc.contains("10\n-39.000000\n"));
        assert!(doc.contains("10\n61.000000\n"));
    }

    #[test]
    fn test_mitred_frame_segment_count() {
        let config = Config {
            add_frame: true,
            mitre_corners: true,
            ..Config::default()
        };
        let (_, doc) = run_layer(&board(), Side::Top, &config);
        assert_eq!(doc.matches("\nLINE\n").count(), 8);
    }

    #[test]
    fn test_empty_layer_with_frame_skips_it() {
        let board = Board {
            name: String::new(),
            components: vec![],
        };
        let config = Config {
            add_frame: true,
            ..Config::default()
        };
        let (count, doc) = run_layer(&board, Side::Top, &config);
        assert_eq!(count, 0);
        // No frame, no NaN coordinates, still a well-formed document.
        assert!(!doc.contains("LINE"));
        assert!(!doc.contains("NaN"));
        assert!(doc.ends_with("0\nEOF\n"));
    }

    #[test]
    fn test_inch_scaling() {
        let config = Config {
            unit: Unit::Inch,
            ..Config::default()
        };
        let (_, doc) = run_layer(&board(), Side::Top, &config);
        assert!(doc.contains("$MEASUREMENT\n70\n0\n"));
        // Right vertex of the first pad: (10 + 0.5) * 25.4.
        assert!(doc.contains("10\n266.700000\n"));
    }

    #[test]
    fn test_labels() {
        let config = Config {
            label_pads: true,
            ..Config::default()
        };
        let (_, doc) = run_layer(&board(), Side::Top, &config);
        assert!(doc.contains("TEXT"));
        assert!(doc.contains("1\nU1.1\n"));
        assert!(doc.contains("1\nU1.2\n"));
    }

    #[test]
    fn test_layers_are_independent() {
        // The bottom document's frame must be centered on the bottom
        // pads only, unaffected by the top run.
        let config = Config {
            add_frame: true,
            ..Config::default()
        };
        let board = board();
        let (_, top) = run_layer(&board, Side::Top, &config);
        let (_, bottom) = run_layer(&board, Side::Bottom, &config);
        // Bottom frame center (5, 5): left edge at 5 - 50 = -45.
        assert!(bottom.contains("10\n-45.000000\n"));
        assert!(!top.contains("10\n-45.000000\n"));
    }
}
