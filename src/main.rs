use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use donut_svg::cli::Args;
use donut_svg::config::Config;
use donut_svg::{DonutRenderer, PointerEvent};

fn main() -> Result<()> {
    // Logs go to stderr so SVG output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("donut_svg=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    if args.save {
        let path = args
            .config
            .clone()
            .or_else(Config::default_path)
            .context("Could not determine config path")?;
        config.save_overrides(&path)?;
        info!("Saved settings to {}", path.display());
    }

    let donut = config.build_donut().context("Invalid chart")?;
    info!(
        "Rendering {} segments ({}x{})",
        donut.len(),
        config.render.width,
        config.render.height
    );

    let mut renderer =
        DonutRenderer::new(donut, config.render_options()).context("Invalid render options")?;

    for label in &args.hover {
        match renderer.index_of(label) {
            Some(index) => renderer.handle_pointer(index, PointerEvent::Enter)?,
            None => warn!("No segment labelled '{}' to hover", label),
        }
    }

    let output = if args.paths {
        renderer
            .path_definitions()
            .into_iter()
            .map(|(label, d)| format!("{}\t{}\n", label, d))
            .collect::<String>()
    } else {
        renderer.to_svg_string()
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
