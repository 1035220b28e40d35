//! Solder-paste stencil export.
//!
//! Turns the surface-mount pad definitions of a board's two cream
//! layers into two DXF line drawings suitable for a cutting plotter.

pub mod config;
pub mod dxf;
pub mod error;
pub mod export;
pub mod frame;
pub mod silhouette;
pub mod types;

use error::ExportError;
use std::path::Path;
use types::Board;

pub use config::{Config, Unit};
pub use export::{export_board, export_layer, ExportSummary};
pub use types::Side;

/// Read a board description JSON from disk.
pub fn load_board(path: &Path) -> Result<Board, ExportError> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
