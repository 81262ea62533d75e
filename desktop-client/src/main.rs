mod app;
mod colors;
mod config;

use clap::Parser;
use common::config::ConfigManager;
use common::game::{GameSession, SessionRng};
use common::logger::init_logger;
use common::render::RenderOptions;
use eframe::egui;

use app::GameApp;
use config::Config;

#[derive(Parser)]
#[command(about = "Desktop client for the grid snake game")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Fixed seed for item placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger();

    let manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => config::get_config_manager(),
    };
    let config: Config = manager.load()?;

    let rng = args
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);

    let mut session = GameSession::new(config.game.clone(), rng);
    session.start();

    let options = RenderOptions::default();
    let canvas_width = options.canvas_extent(config.game.grid_width);
    let canvas_height = options.canvas_extent(config.game.grid_height);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_width + 16.0, canvas_height + 16.0])
            .with_resizable(false)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(session, options)))),
    )?;

    Ok(())
}
