//! DaySync API - caching aggregation service
//!
//! Proxies weather, crypto price, news and MotoGP calendar data, with a
//! shared TTL cache in front of every upstream call.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod timezone;

pub use api::AppState;
pub use config::{Cli, Config};
