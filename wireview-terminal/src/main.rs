/// Wireview Terminal - Rotating wireframe viewer
///
/// Shows the canonical cube, or any OBJ file's edges, as a rotating wireframe.
/// Controls:
///   - W/S, Up/Down: rotate about X
///   - A/D, Left/Right: rotate about Y
///   - E/R: rotate about Z
///   - 0: reset
///   - Q/ESC: Quit

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wireview_core::{obj, WireframeProjector};
use wireview_terminal::{TerminalApp, ViewerConfig};

#[derive(Parser)]
#[command(name = "wireview-terminal", about = "Rotating wireframe viewer for the terminal")]
struct Cli {
    /// OBJ file whose vertices, lines and faces form the wireframe (default: cube)
    #[arg(long)]
    shape: Option<PathBuf>,

    /// Cells per object-space unit
    #[arg(long, default_value = "10.0")]
    scale: f32,

    /// Initial rotation about X, in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rotate_x: f32,

    /// Initial rotation about Y, in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rotate_y: f32,

    /// Initial rotation about Z, in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rotate_z: f32,

    /// Degrees per key press
    #[arg(long, default_value = "5")]
    step: f32,

    /// Spin about Y by this many degrees per tick
    #[arg(long, allow_hyphen_values = true)]
    spin: Option<f32>,

    /// Ticks per second while spinning
    #[arg(long, default_value = "30")]
    fps: u32,

    /// Horizontal stretch for terminal cells
    #[arg(long, default_value = "2.0")]
    cell_aspect: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let projector = match &cli.shape {
        Some(path) => {
            let wireframe = obj::load_obj_wireframe(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            WireframeProjector::from_wireframe(wireframe)
                .with_context(|| format!("invalid wireframe in {}", path.display()))?
        }
        None => WireframeProjector::cube(),
    };

    let config = ViewerConfig {
        scale: cli.scale,
        cell_aspect: cli.cell_aspect,
        initial_degrees: [cli.rotate_x, cli.rotate_y, cli.rotate_z],
        step_degrees: cli.step,
        spin_degrees: cli.spin,
        fps: cli.fps,
    };

    let mut app = TerminalApp::new(projector, config).context("cannot start terminal viewer")?;
    app.run()?;

    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
