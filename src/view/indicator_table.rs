// Indicators area: renders whatever the results surface currently holds

use crate::dashboard::Dashboard;
use crate::model::{IndicatorSet, Polarity};
use crate::state::ResultsView;
use crate::style;
use chrono::{DateTime, Local};
use eframe::egui;

impl Dashboard {
    pub(crate) fn render_indicators(&self, ui: &mut egui::Ui) {
        ui.heading("Indicators");
        ui.add_space(8.0);

        match self.results().view() {
            ResultsView::Idle => {
                ui.weak("Search for a ticker to see its indicators");
            }
            ResultsView::Loading { ticker } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Loading {}…", ticker));
                });
            }
            ResultsView::Failed { ticker, error } => {
                ui.colored_label(style::BEARISH, format!("No indicators for {}", ticker));
                ui.weak(error.to_string());
            }
            ResultsView::Ready {
                indicators,
                fetched_at,
            } => {
                render_summary(ui, indicators, fetched_at);
                ui.add_space(8.0);
                render_signal_table(ui, indicators);
            }
        }
    }
}

fn render_summary(ui: &mut egui::Ui, indicators: &IndicatorSet, fetched_at: &DateTime<Local>) {
    let classification = indicators.classification();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&indicators.ticker).strong().size(20.0));
        ui.separator();
        ui.label(format!("Score {:.2}", indicators.score));
        ui.separator();
        ui.label(egui::RichText::new(classification.label()).color(style::ACCENT));
    });
    egui::Grid::new("indicator_summary")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("Entry");
            ui.label(format!("{:.2}", indicators.entry_price));
            ui.end_row();
            ui.label("Stop loss");
            ui.label(format!("{:.2}", indicators.stop_loss));
            ui.end_row();
            ui.label("Take profit");
            ui.label(format!("{:.2}", indicators.take_profit));
            ui.end_row();
        });
    ui.weak(format!("Updated {}", fetched_at.format("%Y-%m-%d %H:%M:%S")));
}

fn render_signal_table(ui: &mut egui::Ui, indicators: &IndicatorSet) {
    if indicators.signals.is_empty() {
        ui.weak("No signals triggered");
        return;
    }

    use egui_extras::{Column, TableBuilder};
    let default_color = ui.visuals().text_color();
    TableBuilder::new(ui)
        .id_salt("signal_table")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().clip(true))
        .header(style::HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Indicator");
            });
            header.col(|ui| {
                ui.strong("Signal");
            });
        })
        .body(|body| {
            body.rows(style::ROW_HEIGHT, indicators.signals.len(), |mut row| {
                let signal = &indicators.signals[row.index()];
                let color = match signal.polarity() {
                    Polarity::Bullish => style::BULLISH,
                    Polarity::Bearish => style::BEARISH,
                    Polarity::Neutral => default_color,
                };
                row.col(|ui| {
                    ui.label(&signal.name);
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&signal.detail).color(color));
                });
            });
        });
}
