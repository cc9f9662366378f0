//! API Handlers
//!
//! HTTP request handlers for each endpoint. Every data handler follows the
//! same flow: build the cache key, return a fresh cached payload if there is
//! one, otherwise fetch, cache and return. Failed fetches are never cached.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use chrono_tz::Tz;
use tracing::info;

use crate::cache::TtlCache;
use crate::calendar;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CacheStatusResponse, ClearResponse, CryptoQuery, HealthResponse, NewsQuery, Payload,
    TimezoneQuery, WeatherQuery,
};
use crate::providers::{FixtureProvider, LiveProvider, Provider};
use crate::timezone;

/// Application state shared across all handlers.
///
/// The cache is constructed once and shared by every request through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Response cache in front of every provider and file read
    pub cache: Arc<TtlCache<Payload>>,
    /// Upstream data source
    pub provider: Arc<dyn Provider>,
    /// Directory holding the MotoGP calendar
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: TtlCache<Payload>,
        provider: Arc<dyn Provider>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cache: Arc::new(cache),
            provider,
            data_dir: Arc::new(data_dir.into()),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Test mode loads the fixture file; otherwise the live provider is used.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider: Arc<dyn Provider> = if config.test_mode {
            Arc::new(FixtureProvider::from_path(&config.fixtures_path)?)
        } else {
            Arc::new(LiveProvider::new(config)?)
        };
        let cache = TtlCache::new(config.cache_timeout);
        Ok(Self::new(cache, provider, config.data_dir.clone()))
    }
}

/// Returns the cached payload for `key`, or runs `fetch` and caches its result.
pub async fn cached<F, Fut>(cache: &TtlCache<Payload>, key: String, fetch: F) -> Result<Payload>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Payload>>,
{
    if let Some(payload) = cache.get(&key) {
        info!(%key, "[CACHE HIT] returning cached response");
        return Ok(payload);
    }

    info!(%key, "[CACHE MISS] fetching");
    let payload = fetch().await?;
    cache.set(key.clone(), payload.clone());
    info!(%key, "[CACHE SET] cached response");

    Ok(payload)
}

/// Handler for GET /api/weather?location=
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Payload>> {
    let location = query.location()?;
    let payload = cached(&state.cache, query.cache_key()?, || async {
        state.provider.weather(location).await.map(Payload::Weather)
    })
    .await?;

    Ok(Json(payload))
}

/// Handler for GET /api/crypto?symbol=
pub async fn crypto_handler(
    State(state): State<AppState>,
    Query(query): Query<CryptoQuery>,
) -> Result<Json<Payload>> {
    let symbol = query.symbol()?;
    let payload = cached(&state.cache, query.cache_key()?, || async {
        state.provider.crypto_price(symbol).await.map(Payload::Crypto)
    })
    .await?;

    Ok(Json(payload))
}

/// Handler for GET /api/news
pub async fn news_handler(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Payload>> {
    let payload = cached(&state.cache, query.cache_key(), || async {
        state.provider.news(&query).await.map(Payload::News)
    })
    .await?;

    Ok(Json(payload))
}

/// Handler for GET /api/motogp?timezone=
///
/// Returns the whole season with session times shifted to the timezone.
pub async fn motogp_season_handler(
    State(state): State<AppState>,
    Query(query): Query<TimezoneQuery>,
) -> Result<Json<Payload>> {
    let zone = timezone::zone_for(query.timezone())?;
    let payload = cached(&state.cache, query.season_cache_key(), || {
        load_season(&state.data_dir, zone)
    })
    .await?;

    Ok(Json(payload))
}

/// Handler for GET /api/motogpnextrace?timezone=
///
/// Returns the next race with human-readable session times.
pub async fn motogp_next_race_handler(
    State(state): State<AppState>,
    Query(query): Query<TimezoneQuery>,
) -> Result<Json<Payload>> {
    let zone = timezone::zone_for(query.timezone())?;
    let payload = cached(&state.cache, query.next_race_cache_key(), || {
        load_next_race(&state.data_dir, zone)
    })
    .await?;

    Ok(Json(payload))
}

async fn load_season(data_dir: &Path, zone: Tz) -> Result<Payload> {
    let season = calendar::load(data_dir).await?;
    Ok(Payload::Season(calendar::in_timezone(season, zone)))
}

async fn load_next_race(data_dir: &Path, zone: Tz) -> Result<Payload> {
    let season = calendar::load(data_dir).await?;
    let race = calendar::next_race(&season, Utc::now())
        .ok_or_else(|| ApiError::NotFound("no upcoming races found".to_string()))?;
    Ok(Payload::NextRace(calendar::format_race(race, zone)))
}

/// Handler for GET /api/cache
pub async fn cache_status_handler(State(state): State<AppState>) -> Json<CacheStatusResponse> {
    Json(CacheStatusResponse::new(
        state.cache.len(),
        state.cache.timeout().as_secs(),
    ))
}

/// Handler for DELETE /api/cache
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.clear();
    info!(cleared, "cache cleared");

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
