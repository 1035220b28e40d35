use clap::Parser;
use cream_dxf::{export_layer, load_board, Config, Side, Unit};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cream-dxf",
    about = "Export solder-paste stencil DXF files from a board description"
)]
struct Cli {
    /// Input board description (.json)
    input: PathBuf,

    /// Output base path; "-top-cream.dxf" / "-bottom-cream.dxf" are
    /// appended (defaults to the input path without its extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit inch-scaled coordinates instead of millimeters
    #[arg(long)]
    inch: bool,

    /// Cut pad corners (octagon silhouettes for rounded pads)
    #[arg(long)]
    corner_cut: bool,

    /// Cut every contour twice
    #[arg(long)]
    cut_twice: bool,

    /// Draw an alignment frame around each layer
    #[arg(long)]
    frame: bool,

    /// Mitre the frame corners
    #[arg(long)]
    mitre: bool,

    /// Annotate each pad with its component.pad name
    #[arg(long)]
    labels: bool,

    /// Per-side pad shrink in mm
    #[arg(long, default_value_t = 0.1)]
    shrink: f64,

    /// Corner radius floor in mm
    #[arg(long, default_value_t = 0.127)]
    min_radius: f64,

    /// Frame width in mm
    #[arg(long, default_value_t = 100.0)]
    frame_width: f64,

    /// Frame height in mm
    #[arg(long, default_value_t = 80.0)]
    frame_height: f64,

    /// Kerf compensation added to both frame dimensions, mm
    #[arg(long, default_value_t = 0.0)]
    frame_kerf: f64,

    /// Frame mitre cut length in mm
    #[arg(long, default_value_t = 5.0)]
    mitre_length: f64,
}

fn layer_path(base: &Path, side: Side) -> PathBuf {
    let stem = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "board".to_string());
    base.with_file_name(format!("{}-{}.dxf", stem, side.file_suffix()))
}

/// Write one finished document, going through a temporary file so a
/// failed run never leaves a truncated file behind under the real name.
fn write_document(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config {
        unit: if cli.inch { Unit::Inch } else { Unit::Mm },
        corner_cut: cli.corner_cut,
        cut_times: if cli.cut_twice { 2 } else { 1 },
        add_frame: cli.frame,
        mitre_corners: cli.mitre,
        label_pads: cli.labels,
        shrink_width: cli.shrink,
        min_radius: cli.min_radius,
        frame_width: cli.frame_width,
        frame_height: cli.frame_height,
        frame_kerf: cli.frame_kerf,
        mitre_length: cli.mitre_length,
    };

    let board = match load_board(&cli.input) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            std::process::exit(1);
        }
    };

    let base = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(""));

    for side in [Side::Top, Side::Bottom] {
        let path = layer_path(&base, side);
        let mut buf = Vec::new();
        let count = match export_layer(&board, side, &config, &mut buf) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error exporting {} layer: {e}", side.as_str());
                std::process::exit(1);
            }
        };
        if let Err(e) = write_document(&path, &buf) {
            eprintln!("Error writing {}: {e}", path.display());
            std::process::exit(1);
        }
        eprintln!("{}: {count} pads", path.display());
    }
}
