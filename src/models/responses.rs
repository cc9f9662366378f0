//! Response DTOs for the aggregation API
//!
//! Defines the payloads held in the cache and the bodies of the service's
//! own endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Calendar, Race};

/// Current conditions for a location (GET /api/weather)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub location: String,
    #[serde(default)]
    pub region: String,
    /// Local time at the location as reported by the provider
    #[serde(default)]
    pub local_time: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    #[serde(default)]
    pub wind_speed: f64,
    /// mm
    #[serde(default)]
    pub precipitation: f64,
    /// Percent
    #[serde(default)]
    pub humidity: f64,
    /// Degrees Celsius
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub uv_index: f64,
    /// When this service fetched the data
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Latest price for a trading pair (GET /api/crypto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPrice {
    pub symbol: String,
    /// Decimal price as the provider formats it
    pub price: String,
    /// `dd/mm/yy HH:MM:SS`, UTC
    pub timestamp: String,
}

// == Payload ==
/// Every value the service keeps in its response cache.
///
/// Serializes as the inner value so cached and fresh responses are
/// byte-for-byte the same.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Weather(Weather),
    Crypto(CryptoPrice),
    /// Headlines are forwarded as the provider returned them
    News(Value),
    Season(Calendar),
    NextRace(Race),
}

/// Response body for GET /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatusResponse {
    /// Stored entries, including stale ones not yet overwritten
    pub entries: usize,
    /// Freshness window in seconds
    pub timeout_secs: u64,
}

impl CacheStatusResponse {
    pub fn new(entries: usize, timeout_secs: u64) -> Self {
        Self {
            entries,
            timeout_secs,
        }
    }
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries discarded
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cache entries", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
