use crate::client::{EtherscanClient, Result};
use crate::params::{IntoParams, Params};
use crate::types::LogOptions;
use serde_json::Value;

/// Endpoints of the `logs` module.
///
/// All three methods hit `getLogs`; they differ only in whether an emitting
/// address is part of the filter. The explorer caps a page at 1000 records.
#[derive(Debug, Clone, Copy)]
pub struct Logs<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Logs<'a> {
    pub(crate) fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// Logs emitted by `address`.
    pub async fn by_address(
        &self,
        address: impl Into<String>,
        options: LogOptions,
    ) -> Result<Value> {
        self.by_address_and_topics(address, options).await
    }

    /// Logs matching the topics in `options`, from any address.
    pub async fn by_topics(&self, options: LogOptions) -> Result<Value> {
        self.client.call("logs", "getLogs", options).await
    }

    /// Logs emitted by `address` and matching the topics in `options`.
    pub async fn by_address_and_topics(
        &self,
        address: impl Into<String>,
        options: LogOptions,
    ) -> Result<Value> {
        let mut params = Params::new().with("address", address.into());
        params.extend(options.into_params());
        self.client.call("logs", "getLogs", params).await
    }
}
