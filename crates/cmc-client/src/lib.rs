//! # cmc-client
//!
//! A pure CoinMarketCap API client for Rust with no reporting dependencies.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio
//! - **Rate Limiting**: Built-in rate limiting to respect API limits
//! - **Type Safe**: Strongly typed listings converted to `AssetRecord`
//! - **Configurable**: Environment-based configuration via cmc-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmc_client::CmcClient;
//! use cmc_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = CmcClient::new(config)?;
//!
//!     // Fetch the current listings snapshot
//!     let assets = client.listings().await?;
//!     println!("Top asset: {:?}", assets.first());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure semantics
//!
//! Every request is a single attempt; transport and API errors propagate to
//! the caller unchanged so a scheduled run fails fast and the scheduler
//! decides what to do with the failure.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cmc_core::Error>` for consistent error
//! handling across the entire cmc-* ecosystem.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod models;
pub mod provider;
pub mod transport;

// Re-export the main client and common types
pub use client::CmcClient;
pub use provider::AssetProvider;
pub use cmc_core::{AssetRecord, Config, Error, Result};
