// Analysis payload returned by the indicator service
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    #[serde(rename = "Moderate Buy")]
    ModerateBuy,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Avoid/Sell")]
    AvoidSell,
}

impl Classification {
    /// Bucket a composite score the same way the service does
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            Classification::StrongBuy
        } else if score >= 40.0 {
            Classification::ModerateBuy
        } else if score >= 20.0 {
            Classification::Neutral
        } else {
            Classification::AvoidSell
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::StrongBuy => "Strong Buy",
            Classification::ModerateBuy => "Moderate Buy",
            Classification::Neutral => "Neutral",
            Classification::AvoidSell => "Avoid/Sell",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Bullish,
    Bearish,
    Neutral,
}

/// One evaluated rule, e.g. `RSI` -> `+6.2% (RSI low and rising)`
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    pub name: String,
    pub detail: String,
}

impl Signal {
    pub fn polarity(&self) -> Polarity {
        match self.detail.trim_start().chars().next() {
            Some('+') => Polarity::Bullish,
            Some('-') => Polarity::Bearish,
            _ => Polarity::Neutral,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct IndicatorSet {
    pub ticker: String,
    pub score: f64,
    #[serde(default)]
    classification: Option<Classification>,
    #[serde(default, deserialize_with = "signals_in_order")]
    pub signals: Vec<Signal>,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl IndicatorSet {
    pub fn classification(&self) -> Classification {
        self.classification
            .unwrap_or_else(|| Classification::from_score(self.score))
    }

    #[cfg(test)]
    pub(crate) fn sample(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            score: 50.0,
            classification: None,
            signals: vec![Signal {
                name: "ADX".to_string(),
                detail: "+4.2% (ADX indicates a strong trend)".to_string(),
            }],
            entry_price: 100.0,
            stop_loss: 95.0,
            take_profit: 130.0,
        }
    }
}

// The service sends signals as a JSON object; keep its key order.
fn signals_in_order<'de, D>(deserializer: D) -> Result<Vec<Signal>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    Ok(map
        .into_iter()
        .map(|(name, detail)| Signal {
            name,
            detail: match detail {
                Value::String(s) => s,
                other => other.to_string(),
            },
        })
        .collect())
}
