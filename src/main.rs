//! Hours Dashboard - hour-tracking CSV statistics & bar chart viewer
//!
//! Loads a CSV of dated hour records, shows mean/median/standard deviation
//! of the three hour columns and a grouped bar chart filtered by date.

mod charts;
mod config;
mod data;
mod gui;
mod state;
mod stats;

use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use gui::HoursDashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(CONFIG_FILE);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Hours Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Hours Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(HoursDashboardApp::new(cc, &config)))),
    )
}
