//! Legal API Client - REST client for the legal-services marketplace
//!
//! Wraps calls to the remote API with a bounded, time-expiring response cache
//! for GET requests, bearer token handling and session teardown on 401.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use cache::{CacheLookup, SimpleCache};
pub use client::{ApiClient, HttpTransport, SharedCache};
pub use config::Config;
pub use error::{ApiError, Result};
