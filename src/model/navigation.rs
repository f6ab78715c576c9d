use serde::{Deserialize, Serialize};

/// Icon shown next to a navigation destination
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    UserSearch,
    ScanSearch,
    ChartLine,
    Star,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::UserSearch => "🔍",
            Glyph::ScanSearch => "🔭",
            Glyph::ChartLine => "📈",
            Glyph::Star => "⭐",
        }
    }
}

/// A navigable section of the dashboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationItem {
    pub label: String,
    pub destination_id: String,
    pub icon: Glyph,
}

impl NavigationItem {
    pub fn new(label: &str, destination_id: &str, icon: Glyph) -> Self {
        Self {
            label: label.to_string(),
            destination_id: destination_id.to_string(),
            icon,
        }
    }
}

pub fn default_destinations() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("Technical Analysis", "ta", Glyph::UserSearch),
        NavigationItem::new("Discover", "disc", Glyph::ScanSearch),
    ]
}
