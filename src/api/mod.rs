//! API Module
//!
//! HTTP handlers and routing for the aggregation API.
//!
//! # Endpoints
//! - `GET /api/weather`, `/api/crypto`, `/api/news` - Cached provider data
//! - `GET /api/motogp`, `/api/motogpnextrace` - Cached calendar data
//! - `GET|DELETE /api/cache` - Inspect or empty the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
