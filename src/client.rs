//! Async HTTP client for the Etherscan API.

use crate::config::{ClientConfig, ConfigError};
use crate::endpoints::{Account, Block, Contract, Logs, Transaction};
use crate::params::IntoParams;
use crate::request::{Method, RequestBuilder, RequestDescriptor};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The explorer answered with a non-success status. The status code is
    /// kept for diagnostics only; all codes are treated alike.
    #[error("network response was not ok (status {0})")]
    Status(StatusCode),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for failures of the HTTP exchange itself (connection
    /// errors and non-success statuses).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status(_))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Async client for the Etherscan API.
///
/// Endpoints are grouped by API module and reached through accessor methods
/// such as [`EtherscanClient::account`]. Every call returns the decoded JSON
/// body exactly as the explorer sent it.
///
/// # Example
///
/// ```no_run
/// use etherscan_client::{ClientConfig, EtherscanClient, Network};
///
/// #[tokio::main]
/// async fn main() -> etherscan_client::client::Result<()> {
///     let config = ClientConfig::new("YourApiKeyToken")?.with_network(Network::Sepolia);
///     let client = EtherscanClient::new(config);
///     let balance = client
///         .account()
///         .balance("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe", None)
///         .await?;
///     println!("{}", balance["result"]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    http: Client,
    builder: RequestBuilder,
}

impl EtherscanClient {
    /// Create a client with a default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client that sends requests through `http`.
    ///
    /// Use this to set timeouts, proxies or a user agent.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self {
            http,
            builder: RequestBuilder::new(config),
        }
    }

    /// Create a mainnet client for `api_key`.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(ClientConfig::new(api_key)?))
    }

    pub fn config(&self) -> &ClientConfig {
        self.builder.config()
    }

    /// The builder this client uses, for constructing requests to endpoints
    /// that have no dedicated method; pass the result to [`Self::execute`].
    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    // ── Modules ──────────────────────────────────────────────────

    /// Balances, transaction listings and token transfers (`account`).
    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// Block rewards, countdowns and daily block statistics (`block`, `stats`).
    pub fn block(&self) -> Block<'_> {
        Block::new(self)
    }

    /// ABIs, source code and verification (`contract`).
    pub fn contract(&self) -> Contract<'_> {
        Contract::new(self)
    }

    /// Event logs (`logs`).
    pub fn logs(&self) -> Logs<'_> {
        Logs::new(self)
    }

    /// Execution and receipt status (`transaction`).
    pub fn transaction(&self) -> Transaction<'_> {
        Transaction::new(self)
    }

    // ── Transport ────────────────────────────────────────────────

    pub(crate) async fn call(
        &self,
        module: &'static str,
        action: &'static str,
        params: impl IntoParams,
    ) -> Result<Value> {
        let request = self.builder.get(module, action, &params.into_params());
        tracing::debug!(
            module,
            action,
            network = %self.config().network(),
            "sending explorer query"
        );
        self.execute(request).await
    }

    pub(crate) async fn submit(
        &self,
        module: &'static str,
        action: &'static str,
        params: impl IntoParams,
    ) -> Result<Value> {
        let request = self
            .builder
            .post_form(module, action, &params.into_params());
        tracing::debug!(
            module,
            action,
            network = %self.config().network(),
            "submitting explorer form"
        );
        self.execute(request).await
    }

    /// Sends a prepared request and decodes the JSON body.
    ///
    /// Any non-success status is reported as [`Error::Status`]; the body is
    /// not inspected in that case.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        let RequestDescriptor {
            method,
            url,
            headers,
            body,
        } = request;
        let mut http = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        for (name, value) in headers {
            http = http.header(name, value);
        }
        if let Some(body) = body {
            http = http.body(body);
        }

        let response = http.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, method = method.as_str(), "explorer request failed");
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
