mod archive;
mod config;
mod consts;
mod controller;
mod display;
mod gui;
mod starfield;
mod wheel;

use anyhow::Context as _;
use controller::Controller;
use log::{debug, info};
use wheel::WheelEngine;

use crate::archive::ARCHIVE;
use crate::config::WheelConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up...");

    let engine = WheelEngine::new(WheelConfig::default(), &ARCHIVE)
        .context("invalid default wheel configuration")?;
    let controller = Controller::new(engine);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 820.0])
            .with_min_inner_size([360.0, 560.0])
            .with_title("Fortune Wheel"),
        ..Default::default()
    };

    debug!("Launching GUI...");
    eframe::run_native(
        "Fortune Wheel",
        options,
        Box::new(move |cc| Ok(Box::new(gui::AppState::new(cc, controller)))),
    )
    .map_err(|err| anyhow::anyhow!("GUI exited with an error: {err}"))?;

    info!("Clean shutdown complete");

    Ok(())
}
