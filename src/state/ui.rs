// UI state - presentation settings and the search box buffer
use crate::style::{self, Theme};

pub struct UIState {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub sidebar_width: f32,
    pub search_input: String,
}

impl UIState {
    pub fn new(theme: Theme, sidebar_width: f32) -> Self {
        Self {
            theme,
            sidebar_open: true,
            sidebar_width: sidebar_width.clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX),
            search_input: String::new(),
        }
    }
}
