//! Hours Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::config::DashboardConfig;
use crate::data::{DataLoader, LoadedData};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::state::DashboardState;
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(LoadedData),
    Error(String),
}

/// Main application window.
pub struct HoursDashboardApp {
    state: DashboardState,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl HoursDashboardApp {
    /// Create the window and start loading the configured CSV.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Self {
        let mut app = Self {
            state: DashboardState::default(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load(config.data_path.clone());
        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Load a CSV in a background thread; ignored while a load is running.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            log::debug!("Load of {} ignored, another load is running", path.display());
            return;
        }

        log::info!("Loading {}", path.display());
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            match DataLoader::load_csv(&path) {
                Ok(loaded) => {
                    let _ = tx.send(LoadResult::Complete(loaded));
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e}", path.display());
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_status(&status);
                    }
                    LoadResult::Complete(loaded) => {
                        let status = self.state.apply_load_result(Ok(loaded));
                        self.control_panel.set_status(&status);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        let status = self.state.apply_load_result(Err(error));
                        self.control_panel.set_status(&status);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }
}

impl eframe::App for HoursDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &mut self.state, self.is_loading);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &self.state);
        });
    }
}
