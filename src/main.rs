// main.rs - Conway's Game of Life on a finite grid
// Parses the command line, sets up logging and opens the egui window.

use anyhow::anyhow;
use clap::Parser;
use log::info;

use conway_life::{Args, GridEngine, LifeApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().validate()?;
    let app = LifeApp::from_config(&config)?;
    info!("Starting {}x{} field, delay {}ms", config.size, config.size, config.delay.as_millis());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(LifeApp::<GridEngine>::window_size(config.size)),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
