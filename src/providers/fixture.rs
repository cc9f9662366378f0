//! Fixture provider
//!
//! Serves canned responses from a JSON file so the service can run without
//! API keys or network access.
//!
//! ```json
//! {
//!   "weather": { "adelaide": { "location": "Adelaide", "temperature": 22.0 } },
//!   "crypto":  { "BTCUSDT": { "symbol": "BTCUSDT", "price": "1", "timestamp": "..." } },
//!   "news":    { "general_en_au_10": { "articles": [] } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::Provider;
use crate::error::{ApiError, Result};
use crate::models::{CryptoPrice, NewsQuery, Weather};

/// Provider answering from an in-memory fixture set.
///
/// Lookups fall back to the first entry of a section (in key order) when
/// there is no exact match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureProvider {
    #[serde(default)]
    weather: BTreeMap<String, Weather>,
    #[serde(default)]
    crypto: BTreeMap<String, CryptoPrice>,
    #[serde(default)]
    news: BTreeMap<String, Value>,
}

impl FixtureProvider {
    /// Loads fixtures from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Parses fixtures from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let fixtures: Self = serde_json::from_slice(bytes)?;
        debug!(
            weather = fixtures.weather.len(),
            crypto = fixtures.crypto.len(),
            news = fixtures.news.len(),
            "loaded fixtures"
        );
        Ok(fixtures)
    }
}

/// Exact match first, otherwise the first entry.
fn lookup<T: Clone>(section: &BTreeMap<String, T>, key: &str, what: &str) -> Result<T> {
    section
        .get(key)
        .or_else(|| section.values().next())
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("no {} test data available", what)))
}

#[async_trait]
impl Provider for FixtureProvider {
    async fn weather(&self, location: &str) -> Result<Weather> {
        lookup(&self.weather, &location.to_lowercase(), "weather")
    }

    async fn crypto_price(&self, symbol: &str) -> Result<CryptoPrice> {
        lookup(&self.crypto, &symbol.to_uppercase(), "crypto")
    }

    async fn news(&self, query: &NewsQuery) -> Result<Value> {
        let key = format!(
            "{}_{}_{}_{}",
            query.category(),
            query.lang(),
            query.country(),
            query.max()
        );
        lookup(&self.news, &key, "news")
    }
}
