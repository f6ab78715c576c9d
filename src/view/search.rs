// Ticker search box

use crate::dashboard::Dashboard;
use crate::message::Message;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl Dashboard {
    pub(crate) fn render_search(&mut self, ui: &mut egui::Ui, pending: &RefCell<Vec<Message>>) {
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 80.0).clamp(120.0, style::SEARCH_MAX_WIDTH);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.ui.search_input)
                    .hint_text("Search Ticker")
                    .desired_width(width),
            );
            let entered =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Search").clicked() || entered {
                pending
                    .borrow_mut()
                    .push(Message::SubmitSearch(self.ui.search_input.clone()));
            }
        });
    }
}
