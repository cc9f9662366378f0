//! Live provider
//!
//! Calls WeatherAPI, API Ninjas and GNews over HTTPS.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::Provider;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CryptoPrice, NewsQuery, Weather};

const WEATHER_URL: &str = "https://api.weatherapi.com/v1/current.json";
const CRYPTO_URL: &str = "https://api.api-ninjas.com/v1/cryptoprice";
const NEWS_URL: &str = "https://gnews.io/api/v4/top-headlines";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("daysync-api/", env!("CARGO_PKG_VERSION"));

/// Upstream endpoint URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub weather: String,
    pub crypto: String,
    pub news: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather: WEATHER_URL.to_string(),
            crypto: CRYPTO_URL.to_string(),
            news: NEWS_URL.to_string(),
        }
    }
}

/// Provider backed by the real third-party APIs.
#[derive(Debug, Clone)]
pub struct LiveProvider {
    client: Client,
    endpoints: Endpoints,
    weather_api_key: Option<String>,
    api_ninjas_key: Option<String>,
    gnews_api_key: Option<String>,
}

impl LiveProvider {
    /// Creates a provider using the public endpoints and the configured keys.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoints(config, Endpoints::default())
    }

    /// Creates a provider that talks to custom endpoints.
    pub fn with_endpoints(config: &Config, endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoints,
            weather_api_key: config.weather_api_key.clone(),
            api_ninjas_key: config.api_ninjas_key.clone(),
            gnews_api_key: config.gnews_api_key.clone(),
        })
    }
}

/// Fails with `ApiError::Upstream` unless the response is a success.
fn ensure_success(response: Response, provider: &'static str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Upstream {
            provider,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

// == WeatherAPI ==
#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    location: WeatherApiLocation,
    current: WeatherApiCurrent,
}

#[derive(Debug, Deserialize)]
struct WeatherApiLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WeatherApiCurrent {
    temp_c: f64,
    #[serde(default)]
    wind_kph: f64,
    #[serde(default)]
    precip_mm: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    feelslike_c: f64,
    #[serde(default)]
    uv: f64,
}

impl From<WeatherApiResponse> for Weather {
    fn from(resp: WeatherApiResponse) -> Self {
        Self {
            location: resp.location.name,
            region: resp.location.region,
            local_time: resp.location.localtime,
            temperature: resp.current.temp_c,
            wind_speed: resp.current.wind_kph,
            precipitation: resp.current.precip_mm,
            humidity: resp.current.humidity,
            feels_like: resp.current.feelslike_c,
            uv_index: resp.current.uv,
            updated_at: Utc::now(),
        }
    }
}

// == API Ninjas ==
#[derive(Debug, Deserialize)]
struct NinjasPrice {
    symbol: String,
    price: String,
    timestamp: i64,
}

/// Formats unix seconds as `dd/mm/yy HH:MM:SS` in UTC.
fn format_price_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.format("%d/%m/%y %H:%M:%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[async_trait]
impl Provider for LiveProvider {
    async fn weather(&self, location: &str) -> Result<Weather> {
        let key = self
            .weather_api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("weather"))?;

        debug!(location, "calling weather API");
        let response = self
            .client
            .get(&self.endpoints.weather)
            .query(&[("key", key), ("q", location), ("aqi", "no")])
            .send()
            .await?;

        let body: WeatherApiResponse = ensure_success(response, "weather")?.json().await?;
        Ok(body.into())
    }

    async fn crypto_price(&self, symbol: &str) -> Result<CryptoPrice> {
        let key = self
            .api_ninjas_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("API Ninjas"))?;

        debug!(symbol, "calling API Ninjas");
        let response = self
            .client
            .get(&self.endpoints.crypto)
            .query(&[("symbol", symbol)])
            .header("X-Api-Key", key)
            .send()
            .await?;

        let body: NinjasPrice = ensure_success(response, "API Ninjas")?.json().await?;
        Ok(CryptoPrice {
            symbol: body.symbol,
            price: body.price,
            timestamp: format_price_timestamp(body.timestamp),
        })
    }

    async fn news(&self, query: &NewsQuery) -> Result<Value> {
        let key = self
            .gnews_api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("GNews"))?;

        debug!(
            category = query.category(),
            lang = query.lang(),
            country = query.country(),
            "calling GNews"
        );
        let response = self
            .client
            .get(&self.endpoints.news)
            .query(&[
                ("category", query.category()),
                ("lang", query.lang()),
                ("country", query.country()),
                ("max", query.max()),
                ("apikey", key),
            ])
            .send()
            .await?;

        Ok(ensure_success(response, "GNews")?.json().await?)
    }
}
