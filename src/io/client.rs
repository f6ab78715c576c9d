// Client for the analysis service
// GET {base_url}/analyze/{ticker} answers with either the analysis or {"error": ...}

use crate::config::ApiConfig;
use crate::model::IndicatorSet;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Service returned HTTP {0}")]
    Status(u16),
    #[error("Could not read analysis: {0}")]
    Parse(String),
    #[error("{0}")]
    Backend(String),
}

/// Source of indicator data for a ticker
pub trait IndicatorSource: Send + Sync {
    fn fetch_indicators(&self, ticker: &str) -> Result<IndicatorSet, FetchError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeResponse {
    Failure { error: String },
    Success(IndicatorSet),
}

pub struct AnalysisClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl AnalysisClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn analyze_url(&self, ticker: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("analyze")
            .push(ticker);
        Ok(url)
    }
}

impl IndicatorSource for AnalysisClient {
    fn fetch_indicators(&self, ticker: &str) -> Result<IndicatorSet, FetchError> {
        let url = self.analyze_url(ticker)?;
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_analysis(&body)
    }
}

pub fn parse_analysis(body: &str) -> Result<IndicatorSet, FetchError> {
    match serde_json::from_str::<AnalyzeResponse>(body) {
        Ok(AnalyzeResponse::Success(set)) => Ok(set),
        Ok(AnalyzeResponse::Failure { error }) => Err(FetchError::Backend(error)),
        Err(e) => Err(FetchError::Parse(e.to_string())),
    }
}
