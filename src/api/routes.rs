//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_status_handler, crypto_handler, health_handler,
    motogp_next_race_handler, motogp_season_handler, news_handler, weather_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/weather?location=` - Current weather
/// - `GET /api/crypto?symbol=` - Crypto price
/// - `GET /api/news` - Top headlines
/// - `GET /api/motogp?timezone=` - MotoGP season
/// - `GET /api/motogpnextrace?timezone=` - Next MotoGP race
/// - `GET /api/cache` - Cache size and timeout
/// - `DELETE /api/cache` - Empty the cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    let api = Router::new()
        .route("/weather", get(weather_handler))
        .route("/crypto", get(crypto_handler))
        .route("/news", get(news_handler))
        .route("/motogp", get(motogp_season_handler))
        .route("/motogpnextrace", get(motogp_next_race_handler))
        .route("/cache", get(cache_status_handler).delete(cache_clear_handler));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
