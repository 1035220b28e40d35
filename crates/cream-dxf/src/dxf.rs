//! Minimal DXF R12 writer.
//!
//! Serialization is a pure function of the entity description: the
//! writer holds no geometry state, so emitting the same entity twice
//! produces byte-identical output. Only the entities a cutting plotter
//! consumes are generated by the export paths; arcs and circles are
//! part of the documented format and kept available as primitives.

use crate::config::Unit;
use std::io::{self, Write};

/// One drawable DXF entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// Polyline; the closed flag is written alongside the point count.
    Polyline { points: Vec<[f64; 2]>, closed: bool },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        x: f64,
        y: f64,
        height: f64,
        value: String,
    },
    /// Available primitive; unused by the pad and frame paths.
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Available primitive; unused by the pad and frame paths.
    Circle { cx: f64, cy: f64, radius: f64 },
}

/// Streaming DXF document writer.
pub struct DxfWriter<W: Write> {
    out: W,
}

impl<W: Write> DxfWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Document header: interchange version, measurement unit code,
    /// and the entity section opener.
    pub fn header(&mut self, unit: Unit) -> io::Result<()> {
        writeln!(self.out, "999")?;
        writeln!(self.out, "cream-dxf")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "SECTION")?;
        writeln!(self.out, "2")?;
        writeln!(self.out, "HEADER")?;
        writeln!(self.out, "9")?;
        writeln!(self.out, "$ACADVER")?;
        writeln!(self.out, "1")?;
        writeln!(self.out, "AC1009")?;
        writeln!(self.out, "9")?;
        writeln!(self.out, "$MEASUREMENT")?;
        writeln!(self.out, "70")?;
        writeln!(self.out, "{}", unit.measurement_code())?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "ENDSEC")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "SECTION")?;
        writeln!(self.out, "2")?;
        writeln!(self.out, "ENTITIES")?;
        Ok(())
    }

    pub fn entity(&mut self, entity: &Entity) -> io::Result<()> {
        match entity {
            Entity::Polyline { points, closed } => self.polyline(points, *closed),
            Entity::Line { x1, y1, x2, y2 } => self.line(*x1, *y1, *x2, *y2),
            Entity::Text {
                x,
                y,
                height,
                value,
            } => self.text(*x, *y, *height, value),
            Entity::Arc {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
            } => self.arc(*cx, *cy, *radius, *start_angle, *end_angle),
            Entity::Circle { cx, cy, radius } => self.circle(*cx, *cy, *radius),
        }
    }

    /// Entity section closer and end of file.
    pub fn trailer(&mut self) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "ENDSEC")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "EOF")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn polyline(&mut self, points: &[[f64; 2]], closed: bool) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "LWPOLYLINE")?;
        writeln!(self.out, "8")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "62")?;
        writeln!(self.out, "7")?;
        writeln!(self.out, "90")?;
        writeln!(self.out, "{}", points.len())?;
        writeln!(self.out, "70")?;
        writeln!(self.out, "{}", u8::from(closed))?;
        for p in points {
            writeln!(self.out, "10")?;
            writeln!(self.out, "{:.6}", p[0])?;
            writeln!(self.out, "20")?;
            writeln!(self.out, "{:.6}", p[1])?;
        }
        Ok(())
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "LINE")?;
        writeln!(self.out, "8")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "10")?;
        writeln!(self.out, "{x1:.6}")?;
        writeln!(self.out, "20")?;
        writeln!(self.out, "{y1:.6}")?;
        writeln!(self.out, "11")?;
        writeln!(self.out, "{x2:.6}")?;
        writeln!(self.out, "21")?;
        writeln!(self.out, "{y2:.6}")?;
        Ok(())
    }

    fn text(&mut self, x: f64, y: f64, height: f64, value: &str) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "TEXT")?;
        writeln!(self.out, "8")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "10")?;
        writeln!(self.out, "{x:.6}")?;
        writeln!(self.out, "20")?;
        writeln!(self.out, "{y:.6}")?;
        writeln!(self.out, "40")?;
        writeln!(self.out, "{height:.6}")?;
        writeln!(self.out, "1")?;
        writeln!(self.out, "{value}")?;
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "ARC")?;
        writeln!(self.out, "8")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "10")?;
        writeln!(self.out, "{cx:.6}")?;
        writeln!(self.out, "20")?;
        writeln!(self.out, "{cy:.6}")?;
        writeln!(self.out, "40")?;
        writeln!(self.out, "{radius:.6}")?;
        writeln!(self.out, "50")?;
        writeln!(self.out, "{start_angle:.6}")?;
        writeln!(self.out, "51")?;
        writeln!(self.out, "{end_angle:.6}")?;
        Ok(())
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) -> io::Result<()> {
        writeln!(self.out, "0")?;
        writeln!(self.out, "CIRCLE")?;
        writeln!(self.out, "8")?;
        writeln!(self.out, "0")?;
        writeln!(self.out, "10")?;
        writeln!(self.out, "{cx:.6}")?;
        writeln!(self.out, "20")?;
        writeln!(self.out, "{cy:.6}")?;
        writeln!(self.out, "40")?;
        writeln!(self.out, "{radius:.6}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entity: &Entity) -> String {
        let mut writer = DxfWriter::new(Vec::new());
        writer.entity(entity).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_header_measurement_codes() {
        let mut writer = DxfWriter::new(Vec::new());
        writer.header(Unit::Mm).unwrap();
        let metric = String::from_utf8(writer.into_inner()).unwrap();
        assert!(metric.contains("$MEASUREMENT\n70\n1\n"));
        assert!(metric.contains("$ACADVER\n1\nAC1009\n"));
        assert!(metric.ends_with("SECTION\n2\nENTITIES\n"));

        let mut writer = DxfWriter::new(Vec::new());
        writer.header(Unit::Inch).unwrap();
        let inch = String::from_utf8(writer.into_inner()).unwrap();
        assert!(inch.contains("$MEASUREMENT\n70\n0\n"));
    }

    #[test]
    fn test_trailer() {
        let mut writer = DxfWriter::new(Vec::new());
        writer.trailer().unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "0\nENDSEC\n0\nEOF\n");
    }

    #[test]
    fn test_polyline_block() {
        let out = render(&Entity::Polyline {
            points: vec![[1.0, 2.0], [3.0, 4.0], [1.0, 2.0]],
            closed: true,
        });
        let expected = "0\nLWPOLYLINE\n8\n0\n62\n7\n90\n3\n70\n1\n\
                        10\n1.000000\n20\n2.000000\n\
                        10\n3.000000\n20\n4.000000\n\
                        10\n1.000000\n20\n2.000000\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_open_polyline_flag() {
        let out = render(&Entity::Polyline {
            points: vec![[0.0, 0.0], [1.0, 0.0]],
            closed: false,
        });
        assert!(out.contains("90\n2\n70\n0\n"));
    }

    #[test]
    fn test_line_block() {
        let out = render(&Entity::Line {
            x1: 0.0,
            y1: 1.0,
            x2: 2.0,
            y2: 3.0,
        });
        assert_eq!(
            out,
            "0\nLINE\n8\n0\n10\n0.000000\n20\n1.000000\n11\n2.000000\n21\n3.000000\n"
        );
    }

    #[test]
    fn test_text_block() {
        let out = render(&Entity::Text {
            x: 5.0,
            y: 6.0,
            height: 1.0,
            value: "U1.3".to_string(),
        });
        assert!(out.starts_with("0\nTEXT\n"));
        assert!(out.contains("40\n1.000000\n1\nU1.3\n"));
    }

    #[test]
    fn test_arc_and_circle_blocks() {
        let arc = render(&Entity::Arc {
            cx: 0.0,
            cy: 0.0,
            radius: 2.0,
            start_angle: 0.0,
            end_angle: 90.0,
        });
        assert!(arc.starts_with("0\nARC\n"));
        assert!(arc.contains("50\n0.000000\n51\n90.000000\n"));

        let circle = render(&Entity::Circle {
            cx: 1.0,
            cy: 1.0,
            radius: 0.5,
        });
        assert!(circle.starts_with("0\nCIRCLE\n"));
        assert!(circle.contains("40\n0.500000\n"));
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let entity = Entity::Polyline {
            points: vec![[0.123456789, -4.5], [7.0, 8.0]],
            closed: true,
        };
        assert_eq!(render(&entity), render(&entity));
    }
}
