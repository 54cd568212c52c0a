//! Chart Viewer Widget
//! Central panel showing the bar chart of the rows that match the search.

use crate::charts::ChartPlotter;
use crate::data::HoursRecord;
use crate::state::DashboardState;
use egui::RichText;

const MIN_CHART_HEIGHT: f32 = 400.0;

/// Central chart area.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, state: &DashboardState) {
        if state.records.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        let visible: Vec<&HoursRecord> = state.visible_records().collect();
        if visible.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(format!("No dates match \"{}\"", state.query)).size(16.0));
            });
            return;
        }

        ui.label(RichText::new("Hours by Date").size(18.0).strong());
        ui.add_space(8.0);

        let height = ui.available_height().max(MIN_CHART_HEIGHT);
        ChartPlotter::draw_bar_chart(ui, &visible, height);
    }
}
