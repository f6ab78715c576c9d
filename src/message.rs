use crate::io::FetchError;
use crate::model::IndicatorSet;
use crate::state::Ticket;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectDestination(String),
    ToggleSidebar,

    // Search
    SubmitSearch(String),

    // Async results
    IndicatorsLoaded {
        ticket: Ticket,
        ticker: String,
        result: Result<IndicatorSet, FetchError>,
    },
}
