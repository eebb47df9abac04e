use crate::client::{EtherscanClient, Result};
use crate::params::Params;
use serde_json::Value;

/// Endpoints of the `transaction` module.
#[derive(Debug, Clone, Copy)]
pub struct Transaction<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// Contract execution status of `tx_hash`.
    pub async fn execution_status(&self, tx_hash: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("txhash", tx_hash.into());
        self.client.call("transaction", "getstatus", params).await
    }

    /// Receipt status of `tx_hash`. Only meaningful after the Byzantium fork.
    pub async fn receipt_status(&self, tx_hash: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("txhash", tx_hash.into());
        self.client
            .call("transaction", "gettxreceiptstatus", params)
            .await
    }
}
