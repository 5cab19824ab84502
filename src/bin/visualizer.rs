use std::process;

use visualizer::{Visualizer, VisualizerConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let visualizer = Visualizer::new(VisualizerConfig::default());

    if let Err(err) = visualizer.main() {
        log::error!("Failed to initialize the app window: {err}");
        process::exit(1);
    }
}
