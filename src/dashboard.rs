// Dashboard shell state
// Owns the active ticker and section; everything else only reads them.

use crate::config::Config;
use crate::io::IoCommand;
use crate::message::Message;
use crate::state::{ActiveSection, ActiveTicker, ResultsSurface, UIState};
use crate::style::{self, Theme};
use crate::view::NavigationPanel;
use tracing::{debug, info, trace};

pub struct Dashboard {
    pub(crate) navigation: NavigationPanel,
    pub(crate) section: ActiveSection,
    pub(crate) ticker: ActiveTicker,
    pub(crate) results: ResultsSurface,
    pub(crate) ui: UIState,
}

impl Dashboard {
    pub fn new(config: &Config) -> Self {
        Self {
            navigation: NavigationPanel::new(config.navigation.clone()),
            section: ActiveSection::new(),
            ticker: ActiveTicker::default(),
            results: ResultsSurface::new(),
            ui: UIState::new(
                Theme::from_config(&config.theme.mode),
                config.panel.sidebar_width,
            ),
        }
    }

    pub fn ticker(&self) -> &ActiveTicker {
        &self.ticker
    }

    pub fn results(&self) -> &ResultsSurface {
        &self.results
    }

    pub fn title(&self) -> String {
        match self.ticker().symbol() {
            "" => style::APP_TITLE.to_string(),
            symbol => format!("{} - {}", style::APP_TITLE, symbol),
        }
    }

    /// Label of the active section, shown in the breadcrumb
    pub fn breadcrumb(&self) -> &str {
        self.section
            .current(self.navigation.rows())
            .map(|item| item.label.as_str())
            .unwrap_or("")
    }

    pub fn active_destination(&self) -> Option<&str> {
        self.section
            .current(self.navigation.rows())
            .map(|item| item.destination_id.as_str())
    }

    /// Apply one message. Returns the IO work it requires, if any.
    pub fn update(&mut self, message: Message) -> Option<IoCommand> {
        match message {
            Message::SelectDestination(id) => {
                self.select_destination(&id);
                None
            }
            Message::ToggleSidebar => {
                self.ui.sidebar_open = !self.ui.sidebar_open;
                None
            }
            Message::SubmitSearch(raw) => self.submit_search(&raw),
            Message::IndicatorsLoaded {
                ticket,
                ticker,
                result,
            } => {
                if self.results.accept(ticket, &ticker, result) {
                    info!(%ticker, ?ticket, "indicators updated");
                }
                None
            }
        }
    }

    fn select_destination(&mut self, destination_id: &str) {
        if self.section.select(self.navigation.rows(), destination_id) {
            info!(destination = destination_id, "section changed");
        } else {
            debug!(destination = destination_id, "ignoring unknown destination");
        }
    }

    fn submit_search(&mut self, raw: &str) -> Option<IoCommand> {
        let Some(symbol) = self.ticker.submit(raw) else {
            trace!("ignoring blank search");
            return None;
        };
        let ticker = symbol.to_string();
        let ticket = self.results.show(&ticker);
        info!(%ticker, ?ticket, "ticker submitted");
        Some(IoCommand::FetchIndicators { ticket, ticker })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FetchError;
    use crate::model::{Glyph, IndicatorSet, NavigationItem};
    use crate::state::ResultsView;

    fn dashboard() -> Dashboard {
        Dashboard::new(&Config::default())
    }

    fn fetch_of(command: Option<IoCommand>) -> (crate::state::Ticket, String) {
        match command {
            Some(IoCommand::FetchIndicators { ticket, ticker }) => (ticket, ticker),
            None => panic!("expected a fetch"),
        }
    }

    fn loaded(ticket: crate::state::Ticket, ticker: &str) -> Message {
        Message::IndicatorsLoaded {
            ticket,
            ticker: ticker.to_string(),
            result: Ok(IndicatorSet::sample(ticker)),
        }
    }

    fn shown_ticker(dashboard: &Dashboard) -> Option<String> {
        match dashboard.results().view() {
            ResultsView::Ready { indicators, .. } => Some(indicators.ticker.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_initial_state() {
        let dashboard = dashboard();
        assert_eq!(dashboard.ticker(), &ActiveTicker::Empty);
        assert_eq!(dashboard.breadcrumb(), "Technical Analysis");
        assert_eq!(dashboard.active_destination(), Some("ta"));
        assert_eq!(dashboard.results().view(), &ResultsView::Idle);
    }

    #[test]
    fn test_title_follows_ticker() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.title(), "Qian Quantitative");
        dashboard.update(Message::SubmitSearch("AAPL".into()));
        assert_eq!(dashboard.title(), "Qian Quantitative - AAPL");
    }

    #[test]
    fn test_submit_trims_and_fetches() {
        let mut dashboard = dashboard();
        let (_, ticker) = fetch_of(dashboard.update(Message::SubmitSearch("  AAPL  ".into())));
        assert_eq!(ticker, "AAPL");
        assert_eq!(dashboard.ticker().symbol(), "AAPL");
    }

    #[test]
    fn test_every_non_blank_submission_becomes_active() {
        let mut dashboard = dashboard();
        for input in ["AAPL", " msft", "BRK.B ", "\tTSLA\n", "x"] {
            dashboard.update(Message::SubmitSearch(input.into()));
            assert_eq!(dashboard.ticker().symbol(), input.trim());
        }
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut dashboard = dashboard();
        assert!(dashboard.update(Message::SubmitSearch(String::new())).is_none());
        assert_eq!(dashboard.ticker().symbol(), "");
        assert_eq!(dashboard.results().view(), &ResultsView::Idle);

        let (ticket, _) = fetch_of(dashboard.update(Message::SubmitSearch("AAPL".into())));
        dashboard.update(loaded(ticket, "AAPL"));
        assert!(dashboard.update(Message::SubmitSearch("   ".into())).is_none());
        assert_eq!(dashboard.ticker().symbol(), "AAPL");
        assert_eq!(shown_ticker(&dashboard).as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_late_response_for_superseded_ticker() {
        let mut dashboard = dashboard();
        let (aapl, _) = fetch_of(dashboard.update(Message::SubmitSearch("AAPL".into())));
        let (msft, _) = fetch_of(dashboard.update(Message::SubmitSearch("MSFT".into())));

        dashboard.update(loaded(msft, "MSFT"));
        dashboard.update(loaded(aapl, "AAPL"));

        assert_eq!(dashboard.ticker().symbol(), "MSFT");
        assert_eq!(shown_ticker(&dashboard).as_deref(), Some("MSFT"));
    }

    #[test]
    fn test_last_write_wins_for_any_resolution_order() {
        let symbols = ["AAPL", "MSFT", "NVDA", "AMZN"];
        let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];

        for order in orders {
            let mut dashboard = dashboard();
            let tickets: Vec<_> = symbols
                .iter()
                .map(|s| fetch_of(dashboard.update(Message::SubmitSearch(s.to_string()))).0)
                .collect();
            for i in order {
                dashboard.update(loaded(tickets[i], symbols[i]));
            }
            assert_eq!(shown_ticker(&dashboard).as_deref(), Some("AMZN"));
        }
    }

    #[test]
    fn test_fetch_failure_keeps_chrome_and_next_search_works() {
        let mut dashboard = dashboard();
        let (ticket, _) = fetch_of(dashboard.update(Message::SubmitSearch("ZZZZ".into())));
        dashboard.update(Message::IndicatorsLoaded {
            ticket,
            ticker: "ZZZZ".to_string(),
            result: Err(FetchError::Backend("No data found for ticker".to_string())),
        });

        assert!(matches!(
            dashboard.results().view(),
            ResultsView::Failed { ticker, .. } if ticker == "ZZZZ"
        ));
        assert_eq!(dashboard.ticker().symbol(), "ZZZZ");
        assert_eq!(dashboard.breadcrumb(), "Technical Analysis");
        assert_eq!(dashboard.navigation.rows().len(), 2);

        let (ticket, _) = fetch_of(dashboard.update(Message::SubmitSearch("AAPL".into())));
        dashboard.update(loaded(ticket, "AAPL"));
        assert_eq!(shown_ticker(&dashboard).as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_select_destination_updates_breadcrumb() {
        let mut dashboard = dashboard();
        assert!(dashboard
            .update(Message::SelectDestination("disc".into()))
            .is_none());
        assert_eq!(dashboard.breadcrumb(), "Discover");

        dashboard.update(Message::SelectDestination("ta".into()));
        assert_eq!(dashboard.breadcrumb(), "Technical Analysis");
    }

    #[test]
    fn test_unknown_destination_is_ignored() {
        let mut dashboard = dashboard();
        dashboard.update(Message::SelectDestination("disc".into()));
        dashboard.update(Message::SelectDestination("portfolio".into()));
        assert_eq!(dashboard.breadcrumb(), "Discover");
    }

    #[test]
    fn test_section_change_keeps_ticker() {
        let mut dashboard = dashboard();
        dashboard.update(Message::SubmitSearch("AAPL".into()));
        dashboard.update(Message::SelectDestination("disc".into()));
        assert_eq!(dashboard.ticker().symbol(), "AAPL");
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut dashboard = dashboard();
        assert!(dashboard.ui.sidebar_open);
        dashboard.update(Message::ToggleSidebar);
        assert!(!dashboard.ui.sidebar_open);
        dashboard.update(Message::ToggleSidebar);
        assert!(dashboard.ui.sidebar_open);
    }

    #[test]
    fn test_configured_destinations() {
        let mut config = Config::default();
        config.navigation = vec![
            NavigationItem::new("Watchlist", "watch", Glyph::Star),
            NavigationItem::new("Technical Analysis", "ta", Glyph::UserSearch),
        ];
        let mut dashboard = Dashboard::new(&config);
        assert_eq!(dashboard.breadcrumb(), "Watchlist");
        dashboard.update(Message::SelectDestination("ta".into()));
        assert_eq!(dashboard.breadcrumb(), "Technical Analysis");
    }
}
