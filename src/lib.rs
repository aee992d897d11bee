//! pagecache - client-side data access for a content-managed website.
//!
//! This library fetches JSON page payloads from a backend API and caches
//! them in an in-process store, so repeated navigation to an already-visited
//! page costs zero network round trips.
//!
//! Typical usage: build a [`Config`] from the environment, create one shared
//! [`PageStore`], and retrieve pages through a [`PageClient`]:
//!
//! ```no_run
//! use std::sync::Arc;
//! use pagecache::{Config, PageClient, PageStore};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let store = Arc::new(PageStore::new());
//! let client = PageClient::new(&config, store.clone());
//!
//! let home = client.get_page("home", false).await?;
//! println!("{}", home["title"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod store;

pub use api::{ApiError, HttpFetcher, PageClient, PageFetcher};
pub use config::{Config, ConfigError};
pub use store::{PagePayload, PageStore};
