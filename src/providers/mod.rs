//! Upstream data providers
//!
//! Handlers only see the [`Provider`] trait. The live implementation calls
//! the third-party APIs; the fixture implementation serves canned data for
//! test mode.

mod fixture;
mod live;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::{CryptoPrice, NewsQuery, Weather};

pub use fixture::FixtureProvider;
pub use live::{Endpoints, LiveProvider};

/// Source of the data the service caches.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Current conditions for `location`.
    async fn weather(&self, location: &str) -> Result<Weather>;

    /// Latest price for `symbol`.
    async fn crypto_price(&self, symbol: &str) -> Result<CryptoPrice>;

    /// Top headlines, forwarded as returned by the provider.
    async fn news(&self, query: &NewsQuery) -> Result<Value>;
}
