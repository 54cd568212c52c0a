//! Chart Plotter Module
//! Grouped bar chart and statistics block using egui_plot.

use crate::data::{HoursColumn, HoursRecord};
use crate::stats::HoursSummary;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Width of one bar; three bars per date fill 0.75 of a slot.
pub const BAR_WIDTH: f64 = 0.25;

/// Series colour for a column.
pub fn column_color(column: HoursColumn) -> Color32 {
    match column {
        HoursColumn::Expected => Color32::from_rgb(0x88, 0x84, 0xd8),
        HoursColumn::Compulsory => Color32::from_rgb(0x82, 0xca, 0x9d),
        HoursColumn::Voluntary => Color32::from_rgb(0xff, 0xc6, 0x58),
    }
}

/// Draws the dashboard's chart and statistics.
pub struct ChartPlotter;

impl ChartPlotter {
    /// X position of a bar: the series sit side by side around the row index.
    pub fn bar_argument(row: usize, column: HoursColumn) -> f64 {
        let offset = match column {
            HoursColumn::Expected => -BAR_WIDTH,
            HoursColumn::Compulsory => 0.0,
            HoursColumn::Voluntary => BAR_WIDTH,
        };
        row as f64 + offset
    }

    /// Axis label for a grid mark: the date of the row it lands on.
    pub fn date_label(dates: &[String], mark: f64) -> String {
        let idx = mark.round();
        if (mark - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        dates.get(idx as usize).cloned().unwrap_or_default()
    }

    /// One bar series for a column over the given rows.
    pub fn series(records: &[&HoursRecord], column: HoursColumn) -> BarChart {
        let color = column_color(column);
        let bars: Vec<Bar> = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Bar::new(Self::bar_argument(i, column), r.value(column))
                    .width(BAR_WIDTH)
                    .name(&r.extract_date)
                    .fill(color)
            })
            .collect();

        BarChart::new(bars).color(color).name(column.header())
    }

    /// Draw the grouped bar chart for the visible rows.
    pub fn draw_bar_chart(ui: &mut egui::Ui, records: &[&HoursRecord], height: f32) {
        let dates: Vec<String> = records.iter().map(|r| r.extract_date.clone()).collect();

        Plot::new("hours_bar_chart")
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .y_axis_label("Hours")
            .x_axis_formatter(move |mark, _range| Self::date_label(&dates, mark.value))
            .show(ui, |plot_ui| {
                for column in HoursColumn::ALL {
                    plot_ui.bar_chart(Self::series(records, column));
                }
            });
    }

    /// Draw the statistics block, or a loading note before the first load.
    pub fn draw_summary(ui: &mut egui::Ui, summary: Option<&HoursSummary>) {
        ui.label(RichText::new("Descriptive Statistics").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| match summary {
                Some(summary) => {
                    for line in summary.lines() {
                        ui.label(RichText::new(line).size(12.0));
                    }
                }
                None => {
                    ui.label(RichText::new("Loading statistics...").color(Color32::GRAY));
                }
            });
    }
}
