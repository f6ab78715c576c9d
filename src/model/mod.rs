pub mod indicators;
pub mod navigation;

pub use indicators::{IndicatorSet, Polarity};
pub use navigation::{default_destinations, Glyph, NavigationItem};
