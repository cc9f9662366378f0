//! Request DTOs for the aggregation API
//!
//! Query-string parameters for each endpoint. Each query knows the cache key
//! for its logical request.

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Returns the trimmed value if it is present and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Query for GET /api/weather
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    /// City or place name forwarded to the weather provider
    pub location: Option<String>,
}

impl WeatherQuery {
    /// Returns the location, rejecting a missing or blank value.
    pub fn location(&self) -> Result<&str> {
        non_empty(&self.location).ok_or(ApiError::MissingParameter("location"))
    }

    /// Cache key: `weather:{location}`
    pub fn cache_key(&self) -> Result<String> {
        Ok(format!("weather:{}", self.location()?))
    }
}

/// Query for GET /api/crypto
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CryptoQuery {
    /// Trading pair symbol, e.g. `BTCUSDT`
    pub symbol: Option<String>,
}

impl CryptoQuery {
    /// Returns the symbol, rejecting a missing or blank value.
    pub fn symbol(&self) -> Result<&str> {
        non_empty(&self.symbol).ok_or(ApiError::MissingParameter("symbol"))
    }

    /// Cache key: `crypto:{symbol}`
    pub fn cache_key(&self) -> Result<String> {
        Ok(format!("crypto:{}", self.symbol()?))
    }
}

/// Query for GET /api/news
///
/// Every field is optional; blanks take the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub lang: Option<String>,
    pub country: Option<String>,
    pub max: Option<String>,
}

impl NewsQuery {
    /// Headline category (default `general`)
    pub fn category(&self) -> &str {
        non_empty(&self.category).unwrap_or("general")
    }

    /// Article language (default `en`)
    pub fn lang(&self) -> &str {
        non_empty(&self.lang).unwrap_or("en")
    }

    /// Source country (default `au`)
    pub fn country(&self) -> &str {
        non_empty(&self.country).unwrap_or("au")
    }

    /// Maximum number of articles (default `10`)
    pub fn max(&self) -> &str {
        non_empty(&self.max).unwrap_or("10")
    }

    /// Cache key: `news:{category}:{lang}:{country}:{max}`
    pub fn cache_key(&self) -> String {
        format!(
            "news:{}:{}:{}:{}",
            self.category(),
            self.lang(),
            self.country(),
            self.max()
        )
    }
}

/// Query for the MotoGP endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimezoneQuery {
    /// Timezone abbreviation such as `AEST` (default `UTC`)
    pub timezone: Option<String>,
}

impl TimezoneQuery {
    pub fn timezone(&self) -> &str {
        non_empty(&self.timezone).unwrap_or("UTC")
    }

    /// Cache key: `motogp:season:{timezone}`
    pub fn season_cache_key(&self) -> String {
        format!("motogp:season:{}", self.timezone())
    }

    /// Cache key: `motogp:nextrace:{timezone}`
    pub fn next_race_cache_key(&self) -> String {
        format!("motogp:nextrace:{}", self.timezone())
    }
}
