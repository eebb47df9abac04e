//! Typed async client for the Etherscan REST API and compatible explorers.
//!
//! Every method maps one-to-one to an explorer endpoint: typed parameters are
//! turned into a query string, the request is sent, the HTTP status checked
//! and the JSON body returned as is.
//!
//! # Features
//!
//! - **Request construction** ([`RequestBuilder`], [`Params`], [`Network`]) —
//!   pure, always available, no I/O.
//! - **`client` module** (enabled by default) — an async client built on
//!   `reqwest`, with one handle per API module.
//!
//! # Quick start
//!
//! ```no_run
//! use etherscan_client::{EtherscanClient, types::TransactionOptions};
//!
//! #[tokio::main]
//! async fn main() -> etherscan_client::client::Result<()> {
//!     let client = EtherscanClient::from_api_key("YourApiKeyToken")?;
//!     let txs = client
//!         .account()
//!         .normal_transactions(
//!             "0xc5102fE9359FD9a28f877a67E36B0F050d81a3CC",
//!             TransactionOptions::default().paged(1, 10),
//!         )
//!         .await?;
//!     println!("{}", txs["message"]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod network;
pub mod params;
pub mod request;
pub mod types;

pub use config::{ClientConfig, ConfigError};
pub use network::Network;
pub use params::{IntoParams, KeyCase, ParamValue, Params};
pub use request::{Method, RequestBuilder, RequestDescriptor};

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod endpoints;

#[cfg(feature = "client")]
pub use client::EtherscanClient;
