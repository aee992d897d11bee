//! Page API client module.
//!
//! This module provides the `PageClient` for retrieving JSON page payloads
//! from the backend, preferring the in-process store over the network.
//!
//! Pages are served as plain JSON resources at `<api_location>/<id>.json`;
//! no authentication is involved.

pub mod client;
pub mod error;

pub use client::{HttpFetcher, PageClient, PageFetcher};
pub use error::ApiError;
