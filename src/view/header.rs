// Header chrome: sidebar toggle and breadcrumb

use crate::dashboard::Dashboard;
use crate::message::Message;
use eframe::egui;
use std::cell::RefCell;

impl Dashboard {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui, pending: &RefCell<Vec<Message>>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let toggle = if self.ui.sidebar_open { "⏴" } else { "☰" };
            if ui.button(toggle).on_hover_text("Toggle sidebar").clicked() {
                pending.borrow_mut().push(Message::ToggleSidebar);
            }
            ui.separator();
            ui.label(egui::RichText::new(self.breadcrumb()).strong());
        });
        ui.add_space(4.0);
    }
}
