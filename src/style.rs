use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// "light" selects the light theme, anything else is dark
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

pub const APP_TITLE: &str = "Qian Quantitative";

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const SEARCH_MAX_WIDTH: f32 = 420.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 150.0;
pub const SIDEBAR_MAX: f32 = 400.0;
pub const SIDEBAR_DEFAULT: f32 = 220.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const BULLISH: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);
pub const BEARISH: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
