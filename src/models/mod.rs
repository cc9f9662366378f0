//! Request and Response models for the aggregation API
//!
//! This module defines the DTOs used for query strings, cached payloads and
//! response bodies.

pub mod calendar;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use calendar::{Calendar, Race, Sessions};
pub use requests::{CryptoQuery, NewsQuery, TimezoneQuery, WeatherQuery};
pub use responses::{
    CacheStatusResponse, ClearResponse, CryptoPrice, HealthResponse, Payload, Weather,
};
