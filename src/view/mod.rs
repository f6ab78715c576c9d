pub mod header;
pub mod indicator_table;
pub mod search;
pub mod sidebar;

pub use sidebar::NavigationPanel;
