pub mod results;
pub mod section;
pub mod ticker;
pub mod ui;

pub use results::{ResultsSurface, ResultsView, Ticket};
pub use section::ActiveSection;
pub use ticker::ActiveTicker;
pub use ui::UIState;
