/// Wirecast command line front end
///
/// Loads an OBJ mesh, renders its wireframe with `wirecast-core` and writes
/// the result as a PNG.
use anyhow::Context;
use log::info;
use std::path::Path;
use wirecast_core::{load_obj, render_mesh, RenderConfig, RenderStats};

pub mod cli;
pub mod encoder;

pub use cli::Cli;
pub use encoder::PngEncoder;

/// Run one load, render and write pass.
pub fn run(input: &Path, config: &RenderConfig) -> anyhow::Result<RenderStats> {
    info!("Processing {}", input.display());
    let mesh = load_obj(input).with_context(|| format!("loading {}", input.display()))?;

    if let Some(bounds) = mesh.bounds() {
        info!("Minimum vector: {}", bounds.min);
        info!("Maximum vector: {}", bounds.max);
        info!("Calculated extent: {}", bounds.extent());
    }

    let rendered = render_mesh(&mesh, config)
        .with_context(|| format!("rendering {}", input.display()))?;
    info!("Using scale: {}", rendered.transform.scale);

    let mut encoder = PngEncoder::create(&config.output)?;
    rendered
        .framebuffer
        .write(&mut encoder)
        .with_context(|| format!("writing {}", config.output.display()))?;
    info!("Written output to {}", config.output.display());

    Ok(rendered.stats)
}
