// Active ticker - the subject the results area is showing

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveTicker {
    #[default]
    Empty,
    Loaded(String),
}

impl ActiveTicker {
    /// Empty string until the first search
    pub fn symbol(&self) -> &str {
        match self {
            ActiveTicker::Empty => "",
            ActiveTicker::Loaded(symbol) => symbol,
        }
    }

    /// Apply a raw search submission. Returns the new symbol, or `None`
    /// when the trimmed input is blank and nothing changed.
    pub fn submit(&mut self, raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        *self = ActiveTicker::Loaded(trimmed.to_string());
        Some(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let ticker = ActiveTicker::default();
        assert_eq!(ticker, ActiveTicker::Empty);
        assert_eq!(ticker.symbol(), "");
    }

    #[test]
    fn test_submit_trims() {
        let mut ticker = ActiveTicker::default();
        assert_eq!(ticker.submit("  AAPL  "), Some("AAPL"));
        assert_eq!(ticker, ActiveTicker::Loaded("AAPL".to_string()));
    }

    #[test]
    fn test_blank_input_keeps_previous_symbol() {
        let mut ticker = ActiveTicker::default();
        assert_eq!(ticker.submit(""), None);
        assert_eq!(ticker, ActiveTicker::Empty);

        ticker.submit("MSFT");
        for blank in ["", " ", "\t\n", "   "] {
            assert_eq!(ticker.submit(blank), None);
            assert_eq!(ticker.symbol(), "MSFT");
        }
    }

    #[test]
    fn test_no_format_validation() {
        let mut ticker = ActiveTicker::default();
        assert_eq!(ticker.submit(" brk.b "), Some("brk.b"));
        assert_eq!(ticker.submit("^GSPC"), Some("^GSPC"));
    }
}
