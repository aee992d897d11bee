//! In-process page store.
//!
//! This module provides the `PageStore` for caching fetched page payloads.
//! Entries live for the duration of the process; there is no eviction.

pub mod pages;

pub use pages::{PagePayload, PageStore};
