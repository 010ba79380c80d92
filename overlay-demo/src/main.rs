//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Builds an overlay from a scene file, hit-tests the probe points and
// optionally writes the rendered mask as SVG
//--------------------------------------------------------------------

extern crate overlay_region;
extern crate overlay_svg;

mod logging;
mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use overlay_region::OverlayRegion;
use overlay_svg::SvgRenderer;
use scene::{Scene, build_holes};

#[derive(Parser, Debug)]
#[command(about = "Cuts holes out of a translucent overlay and hit-tests points against them")]
struct Args {
    /// JSON scene describing the overlay, its holes and the points to probe
    scene: PathBuf,

    /// Where to write the final mask as an SVG document
    #[arg(long)]
    svg_out: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let scene = Scene::load(&args.scene)?;
    let initial = build_holes(&scene.holes)?;
    let mut overlay = OverlayRegion::new(scene.bounds.into(), Some(initial))
        .context("failed to build the overlay")?;
    overlay.set_style(scene.style());

    let renderer = SvgRenderer::new();
    if args.svg_out.is_some() {
        overlay.attach_renderer(Box::new(renderer.clone()));
    }

    for (i, batch) in scene.subtractions.iter().enumerate() {
        let holes = build_holes(batch).with_context(|| format!("invalid hole in subtraction {}", i))?;
        overlay.subtract(holes).with_context(|| format!("failed to apply subtraction {}", i))?;
    }

    tracing::info!(holes = overlay.holes().len(), state = ?overlay.state(), "overlay ready");

    for point in scene.probe_points() {
        let verdict = if overlay.contains_point_in_hole(point) { "pass-through" }
            else if overlay.intercepts(point) { "intercepted" }
            else { "outside" };
        println!("{}: {}", point, verdict);
    }

    if let Some(path) = &args.svg_out {
        renderer.save(path).with_context(|| format!("failed to save {}", path.display()))?;
    }

    Ok(())
}
