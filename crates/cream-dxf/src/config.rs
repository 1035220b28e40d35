/// Output unit system.
///
/// The scale factor multiplies every emitted coordinate and every mm
/// constant before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mm,
    Inch,
}

impl Unit {
    pub fn scale(&self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Inch => 25.4,
        }
    }

    /// DXF $MEASUREMENT code: 0 = English, 1 = metric.
    pub fn measurement_code(&self) -> u8 {
        match self {
            Unit::Mm => 1,
            Unit::Inch => 0,
        }
    }
}

/// Immutable configuration for one export run.
///
/// Built once before any geometry or serialization runs and threaded
/// by reference through every component; both layer passes share it.
#[derive(Debug, Clone)]
pub struct Config {
    pub unit: Unit,
    /// Replace pad corners with short diagonal cuts (octagon silhouettes).
    pub corner_cut: bool,
    /// Plotter passes over each contour, 1 or 2.
    pub cut_times: u32,
    /// Draw an alignment frame around each layer.
    pub add_frame: bool,
    /// Mitre the frame corners.
    pub mitre_corners: bool,
    /// Annotate each pad with "COMPONENT.PAD" text.
    pub label_pads: bool,

    /// Per-side inset applied to every pad half-extent, mm.
    pub shrink_width: f64,
    /// Corner radius floor for rounded pads, mm.
    pub min_radius: f64,
    /// Fixed frame dimensions, mm; never derived from the bounding box.
    pub frame_width: f64,
    pub frame_height: f64,
    /// Added to both frame dimensions to compensate blade kerf, mm.
    pub frame_kerf: f64,
    /// Length of the frame corner mitre cut, mm.
    pub mitre_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: Unit::Mm,
            corner_cut: false,
            cut_times: 1,
            add_frame: false,
            mitre_corners: false,
            label_pads: false,
            shrink_width: 0.1,
            min_radius: 0.127,
            frame_width: 100.0,
            frame_height: 80.0,
            frame_kerf: 0.0,
            mitre_length: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_codes() {
        assert_eq!(Unit::Mm.measurement_code(), 1);
        assert_eq!(Unit::Inch.measurement_code(), 0);
        assert_eq!(Unit::Mm.scale(), 1.0);
        assert_eq!(Unit::Inch.scale(), 25.4);
    }
}
