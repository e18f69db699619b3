/// Wirecast - render a Wavefront OBJ wireframe to PNG
///
/// Usage: wirecast [--width N] [--height N] [--out FILE] model.obj
use clap::Parser;
use wirecast_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (input, config) = Cli::parse().into_config();
    run(&input, &config)?;
    Ok(())
}
