// Results surface state - what the indicator table shows for the active ticker
//
// Every fetch is tagged with a ticket. Only the response carrying the latest
// ticket is accepted; anything older is for a ticker that has been replaced.
use crate::io::FetchError;
use crate::model::IndicatorSet;
use chrono::{DateTime, Local};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[cfg(test)]
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    Idle,
    Loading {
        ticker: String,
    },
    Ready {
        indicators: IndicatorSet,
        fetched_at: DateTime<Local>,
    },
    Failed {
        ticker: String,
        error: FetchError,
    },
}

pub struct ResultsSurface {
    ticket: Ticket,
    view: ResultsView,
}

impl ResultsSurface {
    pub fn new() -> Self {
        Self {
            ticket: Ticket::default(),
            view: ResultsView::Idle,
        }
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    /// Point the surface at `ticker`, dropping whatever it showed before.
    /// Returns the ticket the caller must attach to the fetch.
    pub fn show(&mut self, ticker: &str) -> Ticket {
        self.ticket = Ticket(self.ticket.0 + 1);
        self.view = ResultsView::Loading {
            ticker: ticker.to_string(),
        };
        self.ticket
    }

    /// Apply a fetch response. Returns false when the response is stale.
    pub fn accept(
        &mut self,
        ticket: Ticket,
        ticker: &str,
        result: Result<IndicatorSet, FetchError>,
    ) -> bool {
        if ticket != self.ticket {
            debug!(%ticker, ?ticket, current = ?self.ticket, "discarding stale indicators");
            return false;
        }

        self.view = match result {
            Ok(indicators) => ResultsView::Ready {
                indicators,
                fetched_at: Local::now(),
            },
            Err(error) => ResultsView::Failed {
                ticker: ticker.to_string(),
                error,
            },
        };
        true
    }
}
