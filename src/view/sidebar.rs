// Navigation sidebar
// Presentation only: clicks come back as messages, the dashboard owns the selection

use crate::message::Message;
use crate::model::NavigationItem;
use crate::style;
use eframe::egui;

pub struct NavigationPanel {
    items: Vec<NavigationItem>,
}

impl NavigationPanel {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self { items }
    }

    /// Destinations in configured order
    pub fn rows(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn contains(&self, destination_id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.destination_id == destination_id)
    }

    /// Message for a click on `destination_id`, if it is one of ours
    pub fn select(&self, destination_id: &str) -> Option<Message> {
        self.contains(destination_id)
            .then(|| Message::SelectDestination(destination_id.to_string()))
    }

    pub fn render(&self, ui: &mut egui::Ui, active_id: Option<&str>) -> Option<Message> {
        let responses = self.render_rows(ui, active_id);
        responses
            .iter()
            .position(|response| response.clicked())
            .and_then(|index| self.select(&self.items[index].destination_id))
    }

    // One clickable label response per item, in item order
    fn render_rows(&self, ui: &mut egui::Ui, active_id: Option<&str>) -> Vec<egui::Response> {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(style::APP_TITLE).small().weak());
        ui.add_space(4.0);

        let default_color = ui.visuals().text_color();
        self.items
            .iter()
            .map(|item| {
                let is_active = active_id == Some(item.destination_id.as_str());
                let color = if is_active { style::ACCENT } else { default_color };

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(item.icon.symbol())
                            .size(style::ICON_SIZE)
                            .color(color),
                    );
                    style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(&item.label).color(color),
                        egui::Sense::click(),
                    )
                })
                .inner
            })
            .collect()
    }
}
