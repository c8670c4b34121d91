use clap::Parser;
use log::info;

use mandelzoom::{AnimationController, CliArgs, GifFilePresenter, LogObserver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = args.to_config();

    info!(
        "{}x{} pixels, {} frames, {} max iterations, zooming by {} toward {}",
        config.width,
        config.height,
        config.frames,
        config.max_iterations,
        config.zoom_factor,
        config.zoom_point
    );

    let mut controller = AnimationController::new(GifFilePresenter::new(), LogObserver::new());

    controller.generate(&config)?;
    controller.write(&args.outfile)?;

    info!("saved to {}", args.outfile.display());
    Ok(())
}
