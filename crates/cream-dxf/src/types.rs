use serde::{Deserialize, Serialize};

// ─── Side helper ─────────────────────────────────────────────────────

/// Physical board face carrying a cream (solder-paste) layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "T")]
    Top,
    #[serde(rename = "B")]
    Bottom,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }

    /// Suffix substituted onto the output base name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Side::Top => "top-cream",
            Side::Bottom => "bottom-cream",
        }
    }
}

// ─── Board description ───────────────────────────────────────────────

/// One surface-mount pad as supplied by the host CAD application.
///
/// `dx`/`dy` are the half-extents of the cream opening in mm; `angle`
/// is the pad rotation in degrees. The exporter never mutates pads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pad {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub angle: f64,
    /// Roundness percentage, 0-100.
    #[serde(default)]
    pub roundness: u8,
    /// Whether the pad has a cream opening at all.
    #[serde(default = "default_true")]
    pub cream: bool,
    pub side: Side,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub pads: Vec<Pad>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub name: String,
    pub components: Vec<Component>,
}

// ─── Bounding Box ────────────────────────────────────────────────────

/// Running axis-aligned extent of all silhouettes on one layer.
///
/// One instance per output document; starts at the infinite sentinel
/// and only ever widens.
#[derive(Debug, Clone)]
pub struct BBox {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl BBox {
    pub fn empty() -> Self {
        Self {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: f64::NEG_INFINITY,
            maxy: f64::NEG_INFINITY,
        }
    }

    /// Widen to include the rectangle [x-w, x+w] x [y-h, y+h].
    pub fn expand(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.minx = self.minx.min(x - w);
        self.miny = self.miny.min(y - h);
        self.maxx = self.maxx.max(x + w);
        self.maxy = self.maxy.max(y + h);
    }

    /// True until the first `expand` call; the center is meaningless
    /// while empty.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.minx + self.maxx) / 2.0,
            (self.miny + self.maxy) / 2.0,
        )
    }
}
